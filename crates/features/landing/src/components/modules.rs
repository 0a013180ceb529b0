use super::Glyph;
use dioxus::prelude::*;
use vesla_domain::catalog::{ModuleDescriptor, public_modules};
use vesla_domain::icon::Icon;
use vesla_domain::links::ErpLinks;

/// Gallery of every publicly visible module.
#[component]
pub fn ModulesSection(links: ErpLinks) -> Element {
    let modules = public_modules();
    let count = modules.len();

    rsx! {
        section { id: "modules", class: "py-20 px-4 bg-gray-50",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold text-gray-900 mb-4",
                        "{count} Powerful Modules, One Platform"
                    }
                    p { class: "text-xl text-gray-600 max-w-3xl mx-auto",
                        "Each module is designed to work seamlessly together, giving you complete control over every aspect of your business."
                    }
                }
                div { class: "grid md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                    for module in modules.iter().copied() {
                        ModuleCard {
                            key: "{module.id}",
                            module,
                            href: links.knowledge_base(module.id),
                        }
                    }
                }
            }
        }
    }
}

/// Card linking to the module's knowledge-base page; lists its leading features only.
#[component]
pub fn ModuleCard(module: &'static ModuleDescriptor, href: String) -> Element {
    let colors = module.color.classes();

    rsx! {
        a {
            href: "{href}",
            "data-module": module.id,
            class: "bg-white rounded-2xl p-6 shadow-lg hover:shadow-xl transition-all group hover:-translate-y-1 border border-gray-100",
            div { class: "w-14 h-14 bg-gradient-to-br {colors.bg} rounded-xl flex items-center justify-center mb-4 group-hover:scale-110 transition-transform",
                Glyph { icon: module.icon, class: "w-7 h-7 text-white" }
            }
            h3 { class: "text-xl font-bold text-gray-900 mb-2", "{module.name}" }
            p { class: "text-gray-600 mb-4 text-sm", "{module.description}" }
            ul { class: "space-y-2 mb-4",
                for feature in module.card_features() {
                    li { key: "{feature}", class: "flex items-center gap-2 text-sm text-gray-600",
                        Glyph { icon: Icon::CheckCircle, class: "w-4 h-4 text-green-500 flex-shrink-0" }
                        "{feature}"
                    }
                }
            }
            div { class: "flex items-center gap-1 text-sm font-medium {colors.text} group-hover:gap-2 transition-all",
                "Learn more "
                Glyph { icon: Icon::ArrowRight, class: "w-4 h-4" }
            }
        }
    }
}
