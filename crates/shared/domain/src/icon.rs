/// Glyphs used across the page, named after the lucide icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    BarChart,
    Building,
    Car,
    Check,
    CheckCircle,
    ChevronRight,
    Clock,
    DollarSign,
    Globe,
    Home,
    Mail,
    MapPin,
    Menu,
    Package,
    Phone,
    Play,
    Shield,
    ShoppingCart,
    Sparkles,
    Star,
    TrendingUp,
    Truck,
    Users,
    Wrench,
    X,
    Zap,
}

impl Icon {
    /// Kebab-case lucide name, used to build the `icon-*` class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::BarChart => "bar-chart-3",
            Self::Building => "building-2",
            Self::Car => "car",
            Self::Check => "check",
            Self::CheckCircle => "check-circle",
            Self::ChevronRight => "chevron-right",
            Self::Clock => "clock",
            Self::DollarSign => "dollar-sign",
            Self::Globe => "globe",
            Self::Home => "home",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Menu => "menu",
            Self::Package => "package",
            Self::Phone => "phone",
            Self::Play => "play",
            Self::Shield => "shield",
            Self::ShoppingCart => "shopping-cart",
            Self::Sparkles => "sparkles",
            Self::Star => "star",
            Self::TrendingUp => "trending-up",
            Self::Truck => "truck",
            Self::Users => "users",
            Self::Wrench => "wrench",
            Self::X => "x",
            Self::Zap => "zap",
        }
    }
}
