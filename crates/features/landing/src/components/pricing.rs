use super::Glyph;
use dioxus::prelude::*;
use vesla_domain::catalog::{PRICING_PLANS, PricingPlan};
use vesla_domain::icon::Icon;
use vesla_domain::theme::PlanTheme;

#[component]
pub fn PricingSection() -> Element {
    rsx! {
        section { id: "pricing", class: "py-20 px-4 bg-gray-50",
            div { class: "max-w-7xl mx-auto",
                div { class: "text-center mb-16",
                    h2 { class: "text-3xl md:text-4xl font-bold text-gray-900 mb-4", "Simple, Transparent Pricing" }
                    p { class: "text-xl text-gray-600", "Start free, scale as you grow." }
                }
                div { class: "grid md:grid-cols-3 gap-8 max-w-5xl mx-auto",
                    for plan in PRICING_PLANS {
                        PlanCard { key: "{plan.name}", plan }
                    }
                }
            }
        }
    }
}

/// Pricing tier; every feature of the plan is listed.
#[component]
pub fn PlanCard(plan: &'static PricingPlan) -> Element {
    let theme = PlanTheme::for_plan(plan.popular);

    rsx! {
        div { class: "rounded-2xl p-8 {theme.card}", "data-plan": plan.name,
            if plan.popular {
                div { class: "text-blue-200 text-sm font-medium mb-2", "Most Popular" }
            }
            h3 { class: "text-2xl font-bold {theme.heading}", "{plan.name}" }
            div { class: "text-3xl font-bold mt-2 {theme.heading}", "{plan.price}" }
            p { class: "text-sm mt-2 {theme.description}", "{plan.description}" }
            ul { class: "mt-6 space-y-3",
                for feature in plan.features {
                    li { key: "{feature}", class: "flex items-center gap-2 text-sm {theme.feature}",
                        Glyph { icon: Icon::Check, class: theme.check }
                        span { "{feature}" }
                    }
                }
            }
            button { class: "w-full mt-8 py-3 rounded-lg font-semibold transition {theme.button}", "Get Started" }
        }
    }
}
