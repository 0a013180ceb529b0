use super::Glyph;
use dioxus::prelude::*;
use vesla_domain::PRODUCT_NAME;
use vesla_domain::catalog::{DASHBOARD_BARS, DASHBOARD_FIGURES, FLOATING_CARDS};
use vesla_domain::icon::Icon;

const TRUST_BADGES: [&str; 3] = ["🇦🇪", "🚗", "💼"];

const GRADIENT_TEXT: &str = "bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent";

#[component]
pub fn Hero(login: String) -> Element {
    rsx! {
        section { class: "pt-32 pb-20 px-4 bg-gradient-to-br from-slate-50 via-blue-50 to-purple-50",
            div { class: "max-w-7xl mx-auto",
                div { class: "grid lg:grid-cols-2 gap-12 items-center",
                    div {
                        div { class: "inline-flex items-center gap-2 px-4 py-2 bg-blue-100 text-blue-700 rounded-full text-sm font-medium mb-6",
                            Glyph { icon: Icon::Zap, class: "w-4 h-4" }
                            "UAE's Most Complete ERP Solution"
                        }
                        h1 { class: "text-4xl md:text-5xl lg:text-6xl font-bold text-gray-900 leading-tight mb-6",
                            "Run Your Entire Business with "
                            span { class: GRADIENT_TEXT, "{PRODUCT_NAME}" }
                        }
                        p { class: "text-xl text-gray-600 mb-8 leading-relaxed",
                            "From vehicle rentals to finance, HR to service centers — manage everything in one powerful platform built for UAE businesses."
                        }
                        div { class: "flex flex-col sm:flex-row gap-4",
                            a {
                                href: "{login}",
                                class: "flex items-center justify-center gap-2 px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-xl text-lg font-semibold hover:shadow-xl transition-all hover:-translate-y-0.5",
                                "Start Free Trial"
                                Glyph { icon: Icon::ArrowRight, class: "w-5 h-5" }
                            }
                            button { class: "flex items-center justify-center gap-2 px-8 py-4 bg-white border-2 border-gray-200 text-gray-700 rounded-xl text-lg font-semibold hover:border-blue-300 transition-all",
                                Glyph { icon: Icon::Play, class: "w-5 h-5" }
                                "Watch Video"
                            }
                        }
                        div { class: "flex items-center gap-6 mt-8 pt-8 border-t border-gray-200",
                            div { class: "flex -space-x-2",
                                for (i, badge) in TRUST_BADGES.into_iter().enumerate() {
                                    div {
                                        key: "{i}",
                                        class: "w-10 h-10 rounded-full bg-gradient-to-br from-blue-100 to-purple-100 border-2 border-white flex items-center justify-center text-lg",
                                        "{badge}"
                                    }
                                }
                            }
                            div {
                                p { class: "font-semibold text-gray-900", "Built for UAE Businesses" }
                                p { class: "text-sm text-gray-600", "VAT, WPS, UAE Pass ready out of the box" }
                            }
                        }
                    }
                    DashboardPreview {}
                }
            }
        }
    }
}

/// Static mock-up of the product dashboard with floating highlight cards.
#[component]
fn DashboardPreview() -> Element {
    rsx! {
        div { class: "relative",
            div { class: "bg-gradient-to-br from-blue-600 to-purple-600 rounded-3xl p-1",
                div { class: "bg-gray-900 rounded-3xl p-4",
                    div { class: "flex items-center gap-2 mb-4",
                        div { class: "w-3 h-3 rounded-full bg-red-500" }
                        div { class: "w-3 h-3 rounded-full bg-yellow-500" }
                        div { class: "w-3 h-3 rounded-full bg-green-500" }
                    }
                    div { class: "bg-gradient-to-br from-slate-800 to-slate-900 rounded-xl p-6 space-y-4",
                        div { class: "flex items-center justify-between",
                            span { class: "text-white font-semibold", "Dashboard Overview" }
                            span { class: "text-green-400 text-sm flex items-center gap-1",
                                span { class: "w-2 h-2 rounded-full bg-green-400 animate-pulse" }
                                "Live"
                            }
                        }
                        div { class: "grid grid-cols-3 gap-3",
                            for figure in DASHBOARD_FIGURES {
                                div { key: "{figure.label}", class: "bg-slate-700/50 rounded-lg p-3",
                                    p { class: "text-gray-400 text-xs", "{figure.label}" }
                                    p { class: "text-white font-bold", "{figure.value}" }
                                }
                            }
                        }
                        div { class: "h-32 bg-gradient-to-r from-blue-500/20 to-purple-500/20 rounded-lg flex items-end p-4",
                            for (i, height) in DASHBOARD_BARS.iter().enumerate() {
                                div {
                                    key: "{i}",
                                    class: "flex-1 bg-gradient-to-t from-blue-500 to-purple-500 rounded-t mx-0.5",
                                    style: "height: {height}%",
                                }
                            }
                        }
                    }
                }
            }
            for card in FLOATING_CARDS {
                div {
                    key: "{card.label}",
                    class: "absolute {card.placement} bg-white rounded-xl shadow-xl p-4 hidden lg:block",
                    div { class: "flex items-center gap-3",
                        div { class: "w-10 h-10 {card.tile} rounded-lg flex items-center justify-center",
                            Glyph { icon: card.icon, class: card.accent }
                        }
                        div {
                            p { class: "text-xs text-gray-500", "{card.label}" }
                            p { class: "font-bold {card.accent}", "{card.value}" }
                        }
                    }
                }
            }
        }
    }
}
