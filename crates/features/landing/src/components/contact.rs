use super::{Brand, Glyph};
use dioxus::prelude::*;
use vesla_domain::COPYRIGHT_HOLDER;
use vesla_domain::config::ContactConfig;
use vesla_domain::icon::Icon;
use vesla_domain::links::mailto;

const COPYRIGHT_YEAR: u16 = 2026;

/// Closing call-to-action with login, email, and contact details.
#[component]
pub fn ContactSection(login: String, contact: ContactConfig) -> Element {
    let mail = mailto(&contact.email);

    rsx! {
        section { id: "contact", class: "py-20 px-4 bg-gradient-to-r from-blue-600 to-purple-600",
            div { class: "max-w-4xl mx-auto text-center",
                h2 { class: "text-3xl md:text-4xl font-bold text-white mb-6", "Ready to Transform Your Business?" }
                p { class: "text-xl text-blue-100 mb-8",
                    "Get in touch with our team for a personalized demo and see how Vesla can streamline your operations."
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center mb-12",
                    a {
                        href: "{login}",
                        class: "flex items-center justify-center gap-2 px-8 py-4 bg-white text-blue-600 rounded-xl text-lg font-semibold hover:shadow-xl transition-all",
                        "Start Free Trial"
                        Glyph { icon: Icon::ChevronRight, class: "w-5 h-5" }
                    }
                    a {
                        href: "{mail}",
                        class: "flex items-center justify-center gap-2 px-8 py-4 border-2 border-white text-white rounded-xl text-lg font-semibold hover:bg-white/10 transition-all",
                        "Contact Sales"
                    }
                }
                div { class: "flex flex-col sm:flex-row gap-8 justify-center text-blue-100",
                    div { class: "flex items-center justify-center gap-2",
                        Glyph { icon: Icon::Mail, class: "w-5 h-5" }
                        "{contact.email}"
                    }
                    div { class: "flex items-center justify-center gap-2",
                        Glyph { icon: Icon::Phone, class: "w-5 h-5" }
                        "{contact.phone}"
                    }
                    div { class: "flex items-center justify-center gap-2",
                        Glyph { icon: Icon::MapPin, class: "w-5 h-5" }
                        "{contact.location}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "py-12 px-4 bg-gray-900",
            div { class: "max-w-7xl mx-auto",
                div { class: "flex flex-col md:flex-row items-center justify-between gap-6",
                    Brand { label_class: "text-white" }
                    p { class: "text-gray-400 text-sm",
                        "© {COPYRIGHT_YEAR} {COPYRIGHT_HOLDER}. All rights reserved. Made with ❤️ in UAE"
                    }
                }
            }
        }
    }
}
