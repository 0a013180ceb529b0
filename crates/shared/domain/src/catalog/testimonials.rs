use super::Testimonial;

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Mohammadreza Madani",
        role: "CEO, MRM Investments",
        quote: "Vesla transformed our operations. TARS integration alone saved us 20 hours per week.",
    },
    Testimonial {
        name: "Liberty Garcia",
        role: "Finance Director",
        quote: "The VAT reporting is flawless. FTA compliance has never been easier.",
    },
    Testimonial {
        name: "Mohammad Rizwan",
        role: "Sales & Operations Manager",
        quote: "Managing 500+ vehicles across 3 locations is now seamless with Vesla.",
    },
];
