use super::PricingPlan;

pub static PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        price: "Free",
        description: "For small businesses getting started",
        features: &["Up to 10 vehicles", "2 users", "Basic reporting", "Email support"],
        popular: false,
    },
    PricingPlan {
        name: "Professional",
        price: "AED 499/mo",
        description: "For growing operations",
        features: &[
            "Up to 100 vehicles",
            "10 users",
            "Advanced analytics",
            "Priority support",
            "All modules",
        ],
        popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: "Custom",
        description: "For large fleets",
        features: &[
            "Unlimited vehicles",
            "Unlimited users",
            "Custom integrations",
            "Dedicated support",
            "SLA guarantee",
        ],
        popular: false,
    },
];
