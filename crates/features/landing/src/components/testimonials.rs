use super::Glyph;
use dioxus::prelude::*;
use vesla_domain::catalog::{TESTIMONIAL_STARS, TESTIMONIALS};
use vesla_domain::icon::Icon;

#[component]
pub fn TestimonialsSection() -> Element {
    rsx! {
        section { class: "py-20 px-4",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold text-gray-900 mb-4", "Trusted by Industry Leaders" }
                }
                div { class: "grid md:grid-cols-3 gap-8",
                    for testimonial in TESTIMONIALS {
                        div { key: "{testimonial.name}", class: "bg-white rounded-2xl p-8 shadow-lg border border-gray-100",
                            div { class: "flex gap-1 mb-4",
                                for star in 0..TESTIMONIAL_STARS {
                                    Glyph { key: "{star}", icon: Icon::Star, class: "w-5 h-5 fill-yellow-400 text-yellow-400" }
                                }
                            }
                            p { class: "text-gray-600 mb-6", "\"{testimonial.quote}\"" }
                            div {
                                div { class: "font-semibold text-gray-900", "{testimonial.name}" }
                                div { class: "text-sm text-gray-500", "{testimonial.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
