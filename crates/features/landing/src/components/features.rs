use super::Glyph;
use dioxus::prelude::*;
use vesla_domain::catalog::FEATURE_HIGHLIGHTS;

#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section { id: "features", class: "py-20 px-4",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold text-gray-900 mb-4",
                        "Everything You Need to Run Your Business"
                    }
                    p { class: "text-xl text-gray-600 max-w-3xl mx-auto",
                        "Vesla ERP brings together all your business operations in one unified platform, designed specifically for UAE market requirements."
                    }
                }
                div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for highlight in FEATURE_HIGHLIGHTS {
                        div {
                            key: "{highlight.title}",
                            class: "bg-gradient-to-br {highlight.theme.card} rounded-2xl p-8 border",
                            Glyph { icon: highlight.icon, class: highlight.theme.icon }
                            h3 { class: "text-xl font-bold mb-2", "{highlight.title}" }
                            p { class: "text-gray-600", "{highlight.description}" }
                        }
                    }
                }
            }
        }
    }
}
