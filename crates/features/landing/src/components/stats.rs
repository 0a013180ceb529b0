use super::Glyph;
use crate::hooks::use_counter;
use dioxus::prelude::*;
use std::time::Duration;
use vesla_domain::catalog::{STATS, Stat};
use vesla_domain::format::group_thousands;

/// Gradient band of animated headline numbers.
#[component]
pub fn StatsBand(duration_ms: u64) -> Element {
    rsx! {
        section { class: "py-16 bg-gradient-to-r from-blue-600 to-purple-600",
            div { class: "max-w-7xl mx-auto px-4",
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-8",
                    for stat in STATS {
                        StatCard { key: "{stat.label}", stat, duration_ms }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatCard(stat: &'static Stat, duration_ms: u64) -> Element {
    let count = use_counter(stat.value, Duration::from_millis(duration_ms));
    let shown = group_thousands(count());

    rsx! {
        div { class: "text-center",
            div { class: "flex items-center justify-center gap-2 mb-2",
                Glyph { icon: stat.icon, class: "w-6 h-6 text-blue-200" }
                span { class: "stat-value text-4xl md:text-5xl font-bold text-white", "{shown}{stat.suffix}" }
            }
            p { class: "text-blue-200", "{stat.label}" }
        }
    }
}
