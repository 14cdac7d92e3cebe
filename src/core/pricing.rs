//! Pricing plans and the monthly/annual billing toggle

use derive_more::Display;
use serde::Serialize;

/// Billing period selected in the pricing toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Billing {
    #[default]
    #[display("Mensual")]
    Monthly,
    #[display("Anual")]
    Annual,
}

impl Billing {
    pub const ALL: [Billing; 2] = [Billing::Monthly, Billing::Annual];

    /// Suffix shown after a numeric price
    pub fn period_suffix(&self) -> &'static str {
        match self {
            Billing::Monthly => "/mes",
            Billing::Annual => "/mes (anual)",
        }
    }
}

/// Price of a plan for one billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    /// US dollars per month
    Usd(u32),
    /// Quoted per customer
    Custom,
}

impl Price {
    pub fn amount(&self) -> Option<u32> {
        match self {
            Price::Usd(amount) => Some(*amount),
            Price::Custom => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Price::Usd(amount) => format!("${}", amount),
            Price::Custom => "A medida".to_string(),
        }
    }

    /// Suffix for this price under `billing`; custom quotes have none
    pub fn suffix(&self, billing: Billing) -> &'static str {
        match self {
            Price::Usd(_) => billing.period_suffix(),
            Price::Custom => "",
        }
    }
}

/// A pricing tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub monthly: Price,
    /// Effective monthly price when billed yearly
    pub annual: Price,
}

impl Plan {
    pub fn price(&self, billing: Billing) -> Price {
        match billing {
            Billing::Monthly => self.monthly,
            Billing::Annual => self.annual,
        }
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        description: "Para equipos pequeños",
        monthly: Price::Usd(49),
        annual: Price::Usd(39),
    },
    Plan {
        name: "Professional",
        description: "Para crecimiento",
        monthly: Price::Usd(99),
        annual: Price::Usd(79),
    },
    Plan {
        name: "Enterprise",
        description: "Soporte 24/7 y SSO",
        monthly: Price::Custom,
        annual: Price::Custom,
    },
];

/// Features listed on every plan card
pub const PLAN_FEATURES: [&str; 3] = [
    "Accesos ilimitados",
    "Reportes avanzados",
    "Soporte prioritario",
];

/// Offer entry for the page's structured data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub price: String,
    pub price_currency: &'static str,
}

/// Monthly offers for every plan with a public price
pub fn offers() -> Vec<Offer> {
    PLANS
        .iter()
        .filter_map(|plan| {
            plan.monthly.amount().map(|amount| Offer {
                kind: "Offer",
                name: plan.name,
                price: amount.to_string(),
                price_currency: "USD",
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_billing_is_monthly() {
        assert_eq!(Billing::default(), Billing::Monthly);
        assert_eq!(Billing::Monthly.to_string(), "Mensual");
        assert_eq!(Billing::Annual.to_string(), "Anual");
    }

    #[test]
    fn test_plan_prices_follow_billing() {
        let starter = PLANS[0];
        assert_eq!(starter.price(Billing::Monthly).label(), "$49");
        assert_eq!(starter.price(Billing::Annual).label(), "$39");

        let pro = PLANS[1];
        assert_eq!(pro.price(Billing::Monthly).amount(), Some(99));
        assert_eq!(pro.price(Billing::Annual).amount(), Some(79));
    }

    #[test]
    fn test_enterprise_is_custom_without_suffix() {
        let enterprise = PLANS[2];
        for billing in Billing::ALL {
            let price = enterprise.price(billing);
            assert_eq!(price.label(), "A medida");
            assert_eq!(price.suffix(billing), "");
            assert_eq!(price.amount(), None);
        }
    }

    #[test]
    fn test_suffixes() {
        let price = Price::Usd(49);
        assert_eq!(price.suffix(Billing::Monthly), "/mes");
        assert_eq!(price.suffix(Billing::Annual), "/mes (anual)");
    }

    #[test]
    fn test_offers_skip_custom_plans() {
        let offers = offers();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].price, "49");

        let json = serde_json::to_value(&offers[1]).unwrap();
        assert_eq!(json["@type"], "Offer");
        assert_eq!(json["priceCurrency"], "USD");
        assert_eq!(json["name"], "Professional");
    }
}
