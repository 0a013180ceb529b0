//! Class-name lookups for data-driven theming.

/// Named accent colors a module card can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Blue,
    Emerald,
    Slate,
    Purple,
    Amber,
    Cyan,
    Rose,
    Yellow,
    Indigo,
    Teal,
    Orange,
}

/// Utility classes derived from a [`ColorToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorClasses {
    /// Gradient stops for the icon tile.
    pub bg: &'static str,
    /// Accent text color for the "Learn more" link.
    pub text: &'static str,
    /// Tinted badge background with matching text.
    pub light: &'static str,
}

impl ColorToken {
    pub const ALL: [Self; 11] = [
        Self::Blue,
        Self::Emerald,
        Self::Slate,
        Self::Purple,
        Self::Amber,
        Self::Cyan,
        Self::Rose,
        Self::Yellow,
        Self::Indigo,
        Self::Teal,
        Self::Orange,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Emerald => "emerald",
            Self::Slate => "slate",
            Self::Purple => "purple",
            Self::Amber => "amber",
            Self::Cyan => "cyan",
            Self::Rose => "rose",
            Self::Yellow => "yellow",
            Self::Indigo => "indigo",
            Self::Teal => "teal",
            Self::Orange => "orange",
        }
    }

    #[must_use]
    pub const fn classes(self) -> ColorClasses {
        match self {
            Self::Blue => ColorClasses {
                bg: "from-blue-500 to-blue-600",
                text: "text-blue-600",
                light: "bg-blue-50 text-blue-700",
            },
            Self::Emerald => ColorClasses {
                bg: "from-emerald-500 to-emerald-600",
                text: "text-emerald-600",
                light: "bg-emerald-50 text-emerald-700",
            },
            Self::Slate => ColorClasses {
                bg: "from-slate-500 to-slate-600",
                text: "text-slate-600",
                light: "bg-slate-100 text-slate-700",
            },
            Self::Purple => ColorClasses {
                bg: "from-purple-500 to-purple-600",
                text: "text-purple-600",
                light: "bg-purple-50 text-purple-700",
            },
            Self::Amber => ColorClasses {
                bg: "from-amber-500 to-amber-600",
                text: "text-amber-600",
                light: "bg-amber-50 text-amber-700",
            },
            Self::Cyan => ColorClasses {
                bg: "from-cyan-500 to-cyan-600",
                text: "text-cyan-600",
                light: "bg-cyan-50 text-cyan-700",
            },
            Self::Rose => ColorClasses {
                bg: "from-rose-500 to-rose-600",
                text: "text-rose-600",
                light: "bg-rose-50 text-rose-700",
            },
            Self::Yellow => ColorClasses {
                bg: "from-yellow-500 to-yellow-600",
                text: "text-yellow-600",
                light: "bg-yellow-50 text-yellow-700",
            },
            Self::Indigo => ColorClasses {
                bg: "from-indigo-500 to-indigo-600",
                text: "text-indigo-600",
                light: "bg-indigo-50 text-indigo-700",
            },
            Self::Teal => ColorClasses {
                bg: "from-teal-500 to-teal-600",
                text: "text-teal-600",
                light: "bg-teal-50 text-teal-700",
            },
            Self::Orange => ColorClasses {
                bg: "from-orange-500 to-orange-600",
                text: "text-orange-600",
                light: "bg-orange-50 text-orange-700",
            },
        }
    }
}

/// Class strings for a pricing card, which flip when the plan is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTheme {
    pub card: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub feature: &'static str,
    pub check: &'static str,
    pub button: &'static str,
}

impl PlanTheme {
    const POPULAR: Self = Self {
        card: "bg-gradient-to-br from-blue-600 to-purple-600 text-white ring-4 ring-blue-600/20 scale-105",
        heading: "text-white",
        description: "text-blue-100",
        feature: "text-white",
        check: "text-blue-200",
        button: "bg-white text-blue-600 hover:bg-blue-50",
    };

    const REGULAR: Self = Self {
        card: "bg-white border border-gray-200",
        heading: "text-gray-900",
        description: "text-gray-500",
        feature: "text-gray-600",
        check: "text-green-500",
        button: "bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:shadow-lg",
    };

    #[must_use]
    pub const fn for_plan(popular: bool) -> Self {
        if popular { Self::POPULAR } else { Self::REGULAR }
    }
}

/// Gradient and accent for one of the headline feature cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTheme {
    pub card: &'static str,
    pub icon: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_has_consistent_classes() {
        for token in ColorToken::ALL {
            let classes = token.classes();
            let name = token.name();
            assert!(classes.bg.contains(name), "{name} gradient");
            assert_eq!(classes.text, format!("text-{name}-600"));
            assert!(classes.light.ends_with(&format!("text-{name}-700")));
        }
    }

    #[test]
    fn popular_plan_is_themed_differently() {
        let popular = PlanTheme::for_plan(true);
        let regular = PlanTheme::for_plan(false);
        assert_ne!(popular, regular);
        assert!(popular.card.contains("scale-105"));
        assert!(!regular.card.contains("scale-105"));
    }
}
