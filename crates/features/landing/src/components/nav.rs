use super::Glyph;
use dioxus::prelude::*;
use vesla_domain::PRODUCT_NAME;
use vesla_domain::icon::Icon;
use vesla_domain::menu::MenuState;

/// In-page anchors shown in both the desktop bar and the mobile panel.
const NAV_LINKS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#modules", "Modules"),
    ("#integrations", "Integrations"),
    ("#pricing", "Pricing"),
];

const LOGIN_CLASS: &str =
    "px-5 py-2 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg";

/// Logo tile and product name.
#[component]
pub fn Brand(
    #[props(default = "bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent")]
    label_class: &'static str,
) -> Element {
    rsx! {
        div { class: "flex items-center gap-3",
            div { class: "w-10 h-10 bg-gradient-to-br from-blue-600 to-purple-600 rounded-xl flex items-center justify-center",
                Glyph { icon: Icon::Sparkles, class: "w-6 h-6 text-white" }
            }
            span { class: "text-xl font-bold {label_class}", "{PRODUCT_NAME}" }
        }
    }
}

/// Fixed top navigation with a collapsible panel on small screens.
#[component]
pub fn NavBar(login: String) -> Element {
    let mut menu = use_signal(MenuState::default);
    let open = menu().is_open();
    let toggle_icon = if open { Icon::X } else { Icon::Menu };

    rsx! {
        nav { class: "fixed top-0 left-0 right-0 z-50 bg-white/90 backdrop-blur-md border-b border-gray-100",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-16",
                    Brand {}
                    div { class: "hidden md:flex items-center gap-8",
                        for (href, label) in NAV_LINKS {
                            a {
                                key: "{href}",
                                href: "{href}",
                                class: "text-gray-600 hover:text-gray-900 transition",
                                "{label}"
                            }
                        }
                        a { href: "{login}", class: "{LOGIN_CLASS} hover:shadow-lg transition-all", "Login" }
                    }
                    button {
                        class: "md:hidden p-2",
                        "aria-label": "Toggle navigation",
                        "aria-expanded": "{open}",
                        onclick: move |_| menu.with_mut(MenuState::toggle),
                        Glyph { icon: toggle_icon, class: "w-6 h-6" }
                    }
                }
            }
            if open {
                div { id: "mobile-menu", class: "md:hidden bg-white border-t border-gray-100 p-4",
                    div { class: "flex flex-col gap-4",
                        for (href, label) in NAV_LINKS {
                            a { key: "{href}", href: "{href}", class: "text-gray-600", "{label}" }
                        }
                        a { href: "{login}", class: "{LOGIN_CLASS} text-center", "Login" }
                    }
                }
            }
        }
    }
}
