use super::ModuleDescriptor;
use crate::audience::Audience;
use crate::icon::Icon;
use crate::theme::ColorToken;

/// Full module catalogue, including packages that never reach the public page.
pub static MODULES: &[ModuleDescriptor] = &[
    ModuleDescriptor {
        id: "rent-a-car",
        name: "Rent-A-Car",
        icon: Icon::Car,
        color: ColorToken::Blue,
        title: "From Booking to Return - One Seamless Flow",
        description: "Complete rental operations with TARS integration, contract management, and real-time fleet tracking.",
        tags: &["Bookings", "Contracts", "TARS"],
        features: &["Online Bookings", "Contract Management", "Fleet Tracking", "TARS Integration"],
        visibility: Audience::ALL,
    },
    ModuleDescriptor {
        id: "finance",
        name: "Finance",
        icon: Icon::DollarSign,
        color: ColorToken::Emerald,
        title: "Double-Entry Bookkeeping Made Simple",
        description: "Full accounting suite with FTA-compliant VAT returns, bank reconciliation, and financial reporting.",
        tags: &["VAT Returns", "Tax Calendar", "Reports"],
        features: &[
            "Accounts Payable/Receivable",
            "Bank Reconciliation",
            "VAT Compliance",
            "Financial Reports",
        ],
        visibility: Audience::ALL,
    },
    ModuleDescriptor {
        id: "admin",
        name: "Admin",
        icon: Icon::Shield,
        color: ColorToken::Slate,
        title: "Your Business, Your Rules",
        description: "Complete control with user management, role-based permissions, and comprehensive audit trails.",
        tags: &["Users", "Roles", "Audit"],
        features: &["User Management", "Role-Based Permissions", "Audit Trails", "System Settings"],
        visibility: Audience::ALL,
    },
    ModuleDescriptor {
        id: "hr",
        name: "HR & Payroll",
        icon: Icon::Users,
        color: ColorToken::Purple,
        title: "Your Team Deserves Better HR",
        description: "Streamlined HR with employee management, leave tracking, attendance, and WPS-compliant payroll.",
        tags: &["Payroll", "Leave", "WPS"],
        features: &["Staff Management", "Attendance Tracking", "Leave Management", "WPS Payroll"],
        visibility: Audience::ALL,
    },
    ModuleDescriptor {
        id: "properties",
        name: "Properties",
        icon: Icon::Home,
        color: ColorToken::Amber,
        title: "Manage Properties Like a Pro",
        description: "Property management with lease tracking, maintenance requests, and tenant portal.",
        tags: &["Leases", "Maintenance", "Tenants"],
        features: &["Property Listings", "Tenant Management", "Lease Tracking", "Maintenance"],
        visibility: Audience::ALL,
    },
    ModuleDescriptor {
        id: "fleet",
        name: "Fleet Management",
        icon: Icon::Truck,
        color: ColorToken::Rose,
        title: "Every Vehicle, Every Detail, Every Day",
        description: "Track your entire fleet with maintenance schedules, fuel management, and GPS integration.",
        tags: &["Tracking", "Maintenance", "Fuel"],
        features: &["Vehicle Lifecycle", "TARS Integration", "Maintenance", "Registration"],
        visibility: Audience::ALL,
    },
    ModuleDescriptor {
        id: "vehicle-vendor",
        name: "Fleet Partners",
        icon: Icon::Building,
        color: ColorToken::Orange,
        title: "Turn Vehicle Owners Into Partners",
        description: "Multi-vendor marketplace for vehicle sales, parts, and services.",
        tags: &["Owner Portal", "Revenue Share"],
        features: &["Owner Portal", "Revenue Sharing", "Vehicle Calendar", "Partner Dashboard"],
        visibility: Audience::ALL,
    },
    ModuleDescriptor {
        id: "dynamic-pricing",
        name: "Dynamic Pricing",
        icon: Icon::BarChart,
        color: ColorToken::Indigo,
        title: "Price Smarter, Earn More",
        description: "AI-powered pricing optimization based on demand, seasonality, and competition.",
        tags: &["AI", "Optimization", "Revenue"],
        features: &[
            "Seasonal Pricing",
            "Demand Analysis",
            "Competitor Tracking",
            "Auto-Adjustments",
        ],
        visibility: Audience::ALL,
    },
    ModuleDescriptor {
        id: "dealership",
        name: "Vehicle Dealership",
        icon: Icon::ShoppingCart,
        color: ColorToken::Teal,
        title: "Track Every Dirham from Acquisition to Sale",
        description: "Complete dealership management with inventory, sales, and customer CRM.",
        tags: &["Inventory", "Sales", "CRM"],
        features: &["Sales Pipeline", "Customer CRM", "Financing", "Trade-ins"],
        visibility: Audience::ALL,
    },
    ModuleDescriptor {
        id: "service-center",
        name: "Service Center",
        icon: Icon::Wrench,
        color: ColorToken::Cyan,
        title: "Workshop Management Made Easy",
        description: "Workshop management with work orders, scheduling, and parts inventory.",
        tags: &["Work Orders", "Parts", "Scheduling"],
        features: &["Work Orders", "Scheduling", "Parts Inventory", "Customer Portal"],
        visibility: Audience::ALL,
    },
    // MRM-only package, kept out of the public gallery.
    ModuleDescriptor {
        id: "speed-sync",
        name: "Speed Sync",
        icon: Icon::Zap,
        color: ColorToken::Yellow,
        title: "Group Fleets in Lockstep",
        description: "Synchronises vehicles, contracts, and rates across MRM group companies.",
        tags: &["Sync", "Group", "MRM"],
        features: &["Cross-Company Sync", "Rate Mirroring", "Group Dashboards", "Conflict Review"],
        visibility: Audience::MRM,
    },
];
