use super::{FeatureHighlight, FloatingCard, PreviewFigure, Stat};
use crate::icon::Icon;
use crate::theme::HighlightTheme;

pub static STATS: &[Stat] = &[
    Stat { value: 10, suffix: "+", label: "Integrated Modules", icon: Icon::Package },
    Stat { value: 50, suffix: "+", label: "Features Built", icon: Icon::Zap },
    Stat { value: 99, suffix: "%", label: "Uptime Target", icon: Icon::Shield },
    Stat { value: 24, suffix: "/7", label: "Support Ready", icon: Icon::Globe },
];

pub static FEATURE_HIGHLIGHTS: &[FeatureHighlight] = &[
    FeatureHighlight {
        title: "UAE Compliant",
        description: "Built-in VAT, WPS payroll, UAE Pass integration, and full regulatory compliance.",
        icon: Icon::Shield,
        theme: HighlightTheme {
            card: "from-blue-50 to-purple-50 border-blue-100",
            icon: "text-blue-600",
        },
    },
    FeatureHighlight {
        title: "Lightning Fast",
        description: "Optimized performance with real-time updates and instant data synchronization.",
        icon: Icon::Zap,
        theme: HighlightTheme {
            card: "from-green-50 to-emerald-50 border-green-100",
            icon: "text-green-600",
        },
    },
    FeatureHighlight {
        title: "Cloud Native",
        description: "Access from anywhere, automatic backups, and enterprise-grade security.",
        icon: Icon::Globe,
        theme: HighlightTheme {
            card: "from-purple-50 to-pink-50 border-purple-100",
            icon: "text-purple-600",
        },
    },
];

pub static INTEGRATIONS: &[&str] =
    &["UAE Pass", "TARS", "WPS", "VAT Filing", "Banks", "Insurance", "RTA", "Salik"];

pub static DASHBOARD_FIGURES: &[PreviewFigure] = &[
    PreviewFigure { label: "Revenue", value: "AED 1.2M" },
    PreviewFigure { label: "Bookings", value: "847" },
    PreviewFigure { label: "Fleet", value: "156" },
];

/// Bar heights of the dashboard chart, in percent of the chart area.
pub static DASHBOARD_BARS: &[u8] = &[40, 65, 45, 80, 55, 90, 70];

pub static FLOATING_CARDS: &[FloatingCard] = &[
    FloatingCard {
        label: "Revenue Up",
        value: "+32%",
        icon: Icon::TrendingUp,
        accent: "text-green-600",
        tile: "bg-green-100",
        placement: "-left-8 top-1/4 animate-bounce",
    },
    FloatingCard {
        label: "Time Saved",
        value: "40 hrs/mo",
        icon: Icon::Clock,
        accent: "text-blue-600",
        tile: "bg-blue-100",
        placement: "-right-4 bottom-1/4",
    },
];
