//! Static copy and metadata rendered by the landing page.
//!
//! Every table is a `'static` slice defined once and never mutated. The only derived view
//! is [`public_modules`], which applies the visibility filter a single time and caches it.

mod highlights;
mod modules;
mod pricing;
mod testimonials;

pub use highlights::{
    DASHBOARD_BARS, DASHBOARD_FIGURES, FEATURE_HIGHLIGHTS, FLOATING_CARDS, INTEGRATIONS, STATS,
};
pub use modules::MODULES;
pub use pricing::PRICING_PLANS;
pub use testimonials::TESTIMONIALS;

use crate::audience::Audience;
use crate::icon::Icon;
use crate::theme::{ColorToken, HighlightTheme};
use std::sync::LazyLock;

/// Number of features a module card lists before the "Learn more" link.
pub const MODULE_CARD_FEATURES: usize = 3;

/// Number of stars shown above each testimonial.
pub const TESTIMONIAL_STARS: usize = 5;

/// One marketed product area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: Icon,
    pub color: ColorToken,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub features: &'static [&'static str],
    pub visibility: Audience,
}

impl ModuleDescriptor {
    /// Leading features shown on the module card.
    #[must_use]
    pub fn card_features(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(MODULE_CARD_FEATURES)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

/// Headline number in the stats band, animated by the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// One of the three cards in the features section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub theme: HighlightTheme,
}

/// Label/value pair shown in the hero's dashboard mock-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFigure {
    pub label: &'static str,
    pub value: &'static str,
}

/// Small card floating beside the dashboard mock-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingCard {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub accent: &'static str,
    pub tile: &'static str,
    /// Absolute offset next to the mock-up, plus any motion class.
    pub placement: &'static str,
}

static PUBLIC_MODULES: LazyLock<Vec<&'static ModuleDescriptor>> =
    LazyLock::new(|| MODULES.iter().filter(|m| m.visibility.is_public()).collect());

/// Modules visible on the public landing page, in catalogue order.
#[must_use]
pub fn public_modules() -> &'static [&'static ModuleDescriptor] {
    &PUBLIC_MODULES
}
