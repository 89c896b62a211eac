//! Pricing plan catalog.
//!
//! The contact form offers these as the optional "interested plan". The server
//! does not check submitted plan names against this list.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanPrice {
    Amount(u32),
    Custom,
}

// numbers stay numbers, custom pricing is the string "custom"
impl Serialize for PlanPrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlanPrice::Amount(amount) => serializer.serialize_u32(*amount),
            PlanPrice::Custom => serializer.serialize_str("custom"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanCta {
    pub text: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: PlanPrice,
    pub currency: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub cta: PlanCta,
}

static PLANS: [PricingPlan; 3] = [
    PricingPlan {
        id: "starter",
        name: "Starter",
        price: PlanPrice::Amount(2_500),
        currency: "KES",
        period: "month",
        description: "For a single duka getting off paper records",
        features: &[
            "1 till, 2 staff accounts",
            "M-Pesa, cash and credit sales",
            "Stock tracking with low-stock alerts",
            "Daily AI business report",
        ],
        highlighted: false,
        badge: None,
        cta: PlanCta {
            text: "Get Started",
            href: "#contact",
        },
    },
    PricingPlan {
        id: "business",
        name: "Business",
        price: PlanPrice::Amount(5_000),
        currency: "KES",
        period: "month",
        description: "For busy shops running retail and wholesale",
        features: &[
            "Up to 3 tills, unlimited staff",
            "Retail and wholesale pricing",
            "Conversational AI assistant",
            "Audit trail for every stock change",
            "Thermal receipt printing",
        ],
        highlighted: true,
        badge: Some("Most Popular"),
        cta: PlanCta {
            text: "Request a Demo",
            href: "#contact",
        },
    },
    PricingPlan {
        id: "enterprise",
        name: "Enterprise",
        price: PlanPrice::Custom,
        currency: "KES",
        period: "month",
        description: "For chains and multi-branch businesses",
        features: &[
            "Unlimited branches and tills",
            "Consolidated multi-branch reporting",
            "Custom integrations",
            "Dedicated onboarding and support",
        ],
        highlighted: false,
        badge: None,
        cta: PlanCta {
            text: "Contact Sales",
            href: "#contact",
        },
    },
];

pub fn pricing_plans() -> &'static [PricingPlan] {
    &PLANS
}

/// Thousands-separated price, e.g. `KES 2,500`, or `Custom`.
pub fn format_price(price: PlanPrice, currency: &str) -> String {
    match price {
        PlanPrice::Amount(amount) => format!("{} {}", currency, group_thousands(amount)),
        PlanPrice::Custom => "Custom".to_string(),
    }
}

/// `(label, value)` pairs for the plan select. The value is the plan name.
pub fn plan_options() -> Vec<(String, &'static str)> {
    pricing_plans()
        .iter()
        .map(|plan| {
            let label = format!("{} - {}", plan.name, format_price(plan.price, plan.currency));
            (label, plan.name)
        })
        .collect()
}

fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prices() {
        assert_eq!(format_price(PlanPrice::Amount(2_500), "KES"), "KES 2,500");
        assert_eq!(format_price(PlanPrice::Amount(999), "KES"), "KES 999");
        assert_eq!(format_price(PlanPrice::Amount(1_250_000), "KES"), "KES 1,250,000");
        assert_eq!(format_price(PlanPrice::Custom, "KES"), "Custom");
    }

    #[test]
    fn options_follow_catalog() {
        let options = plan_options();
        assert_eq!(options.len(), pricing_plans().len());
        assert_eq!(options[0], ("Starter - KES 2,500".to_string(), "Starter"));
        assert_eq!(options[2].0, "Enterprise - Custom");
    }

    #[test]
    fn one_highlighted_plan() {
        assert_eq!(pricing_plans().iter().filter(|p| p.highlighted).count(), 1);
    }

    #[test]
    fn serializes_custom_price_as_string() {
        let json = serde_json::to_value(pricing_plans()).unwrap();
        assert_eq!(json[0]["price"], 2500);
        assert_eq!(json[2]["price"], "custom");
        assert!(json[0].get("badge").is_none());
    }
}
