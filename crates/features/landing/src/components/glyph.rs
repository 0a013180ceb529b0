use dioxus::prelude::*;
use vesla_domain::icon::Icon;

/// Inline lucide icon: 24×24 outline, stroked with the current text color.
#[component]
pub fn Glyph(icon: Icon, #[props(default)] class: &'static str) -> Element {
    let name = icon.name();
    rsx! {
        svg {
            class: "icon icon-{name} {class}",
            "data-icon": name,
            "aria-hidden": "true",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for (i, d) in outline(icon).iter().enumerate() {
                path { key: "{i}", d: "{d}" }
            }
        }
    }
}

/// Path data for each icon. Circles and rectangles are written as arcs so every
/// shape is a single `<path>`.
pub(crate) const fn outline(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
        Icon::Building => &[
            "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
            "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
            "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
            "M10 6h4",
            "M10 10h4",
            "M10 14h4",
            "M10 18h4",
        ],
        Icon::Car => &[
            "M19 17h2c.6 0 1-.4 1-1v-3c0-.9-.7-1.7-1.5-1.9C18.7 10.6 16 10 16 10s-1.3-1.4-2.2-2.3c-.5-.4-1.1-.7-1.8-.7H5c-.6 0-1.1.4-1.4.9l-1.4 2.9A3.7 3.7 0 0 0 2 12v4c0 .6.4 1 1 1h2",
            "M5 17a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            "M9 17h6",
            "M15 17a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        ],
        Icon::Check => &["M20 6 9 17l-5-5"],
        Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        Icon::ChevronRight => &["m9 18 6-6-6-6"],
        Icon::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
        Icon::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        Icon::Globe => &[
            "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
            "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
        Icon::Home => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
        Icon::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        Icon::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
        ],
        Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Icon::Package => &[
            "m7.5 4.27 9 5.15",
            "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z",
            "m3.3 7 8.7 5 8.7-5",
            "M12 22V12",
        ],
        Icon::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        Icon::Play => &["M6 3l14 9-14 9V3z"],
        Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10"],
        Icon::ShoppingCart => &[
            "M7 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
            "M18 21a1 1 0 1 0 2 0a1 1 0 1 0-2 0",
            "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12",
        ],
        Icon::Sparkles => &[
            "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
            "M5 3v4",
            "M19 17v4",
            "M3 5h4",
            "M17 19h4",
        ],
        Icon::Star => &[
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        ],
        Icon::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        Icon::Truck => &[
            "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
            "M15 18H9",
            "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
            "M15 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            "M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
        ],
        Icon::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Icon::Wrench => &[
            "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
        ],
        Icon::X => &["M18 6 6 18", "m6 6 12 12"],
        Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICONS: [Icon; 27] = [
        Icon::ArrowRight,
        Icon::BarChart,
        Icon::Building,
        Icon::Car,
        Icon::Check,
        Icon::CheckCircle,
        Icon::ChevronRight,
        Icon::Clock,
        Icon::DollarSign,
        Icon::Globe,
        Icon::Home,
        Icon::Mail,
        Icon::MapPin,
        Icon::Menu,
        Icon::Package,
        Icon::Phone,
        Icon::Play,
        Icon::Shield,
        Icon::ShoppingCart,
        Icon::Sparkles,
        Icon::Star,
        Icon::TrendingUp,
        Icon::Truck,
        Icon::Users,
        Icon::Wrench,
        Icon::X,
        Icon::Zap,
    ];

    #[test]
    fn every_icon_has_drawable_paths() {
        for icon in ICONS {
            let paths = outline(icon);
            assert!(!paths.is_empty(), "{} has no artwork", icon.name());
            assert!(
                paths.iter().all(|d| d.starts_with(['M', 'm'])),
                "{} path must start with a move",
                icon.name()
            );
        }
    }

    #[test]
    fn menu_and_close_icons_differ() {
        assert_ne!(outline(Icon::Menu), outline(Icon::X));
    }
}
