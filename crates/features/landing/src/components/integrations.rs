use dioxus::prelude::*;
use vesla_domain::catalog::INTEGRATIONS;

#[component]
pub fn IntegrationsSection() -> Element {
    rsx! {
        section { id: "integrations", class: "py-20 px-4",
            div { class: "max-w-7xl mx-auto text-center",
                h2 { class: "text-3xl md:text-4xl font-bold text-gray-900 mb-4", "Seamless Integrations" }
                p { class: "text-xl text-gray-600 max-w-3xl mx-auto mb-12",
                    "Connect with all the UAE government services and third-party systems you need."
                }
                div { class: "flex flex-wrap justify-center gap-4",
                    for integration in INTEGRATIONS {
                        div {
                            key: "{integration}",
                            class: "px-6 py-3 bg-white rounded-full border border-gray-200 shadow-sm hover:shadow-md transition-all hover:-translate-y-0.5",
                            span { class: "font-medium text-gray-700", "{integration}" }
                        }
                    }
                }
            }
        }
    }
}
