//! Page sections, top to bottom.

mod contact;
mod features;
mod glyph;
mod hero;
mod integrations;
mod modules;
mod nav;
mod pricing;
mod stats;
mod testimonials;

pub use contact::{ContactSection, Footer};
pub use features::FeaturesSection;
pub use glyph::Glyph;
pub use hero::Hero;
pub use integrations::IntegrationsSection;
pub use modules::{ModuleCard, ModulesSection};
pub use nav::{Brand, NavBar};
pub use pricing::{PlanCard, PricingSection};
pub use stats::{StatCard, StatsBand};
pub use testimonials::TestimonialsSection;

use dioxus::prelude::*;
use vesla_domain::config::SiteConfig;
use vesla_domain::links::ErpLinks;

/// The whole landing page. Reads [`SiteConfig`] from context.
#[component]
pub fn Landing() -> Element {
    let site = use_context::<SiteConfig>();
    let links = ErpLinks::from_config(&site);
    let login = links.login();

    rsx! {
        div { class: "min-h-screen bg-white",
            NavBar { login: login.clone() }
            Hero { login: login.clone() }
            StatsBand { duration_ms: site.counter.duration_ms }
            FeaturesSection {}
            ModulesSection { links }
            IntegrationsSection {}
            PricingSection {}
            TestimonialsSection {}
            ContactSection { login: login.clone(), contact: site.contact.clone() }
            Footer {}
        }
    }
}
