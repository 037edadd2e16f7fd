//! Recommended tier sets, one per offering type.

use offerwiz_core::TierId;

use crate::offering::OfferingType;
use crate::tier::{BillingType, Tier};

/// A ready-made tier sequence plus the tier selected after applying it.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTemplate {
    pub tiers: Vec<Tier>,
    pub selected: TierId,
}

pub fn recommended_tiers(offering: OfferingType) -> TierTemplate {
    match offering {
        OfferingType::Product => product_template(),
        OfferingType::Service => service_template(),
        OfferingType::Subscription => subscription_template(),
    }
}

fn product_template() -> TierTemplate {
    let tiers = vec![
        Tier::new("base", "Base", BillingType::FixedPrice)
            .with_prices(49.0, 0.0)
            .with_bullets([
                "Core product features",
                "Standard documentation",
                "Email support",
            ]),
        Tier::new("advanced", "Advanced", BillingType::FixedPrice)
            .with_prices(99.0, 0.0)
            .with_bullets([
                "Everything in Base",
                "Advanced features and integrations",
                "Priority support",
                "Free updates for one year",
            ])
            .superseding("base")
            .popular(),
    ];
    TierTemplate {
        tiers,
        selected: TierId::new("base"),
    }
}

fn service_template() -> TierTemplate {
    let tiers = vec![
        Tier::new("starter", "Starter", BillingType::PerProject)
            .with_prices(500.0, 1000.0)
            .with_bullets([
                "Initial consultation",
                "Single deliverable",
                "One revision round",
            ]),
        Tier::new("professional", "Professional", BillingType::PerProject)
            .with_prices(1500.0, 3000.0)
            .with_bullets([
                "Everything in Starter",
                "Up to three deliverables",
                "Three revision rounds",
                "Dedicated project manager",
            ])
            .superseding("starter")
            .popular(),
        Tier::new("enterprise", "Enterprise", BillingType::PerProject)
            .with_prices(5000.0, 10000.0)
            .with_bullets([
                "Everything in Professional",
                "Unlimited deliverables",
                "Unlimited revisions",
                "Priority turnaround",
            ])
            .superseding("professional"),
    ];
    TierTemplate {
        tiers,
        selected: TierId::new("professional"),
    }
}

fn subscription_template() -> TierTemplate {
    let tiers = vec![
        Tier::new("starter", "Starter", BillingType::MonthlyRetainer)
            .with_prices(29.0, 0.0)
            .with_bullets(["Monthly access", "Community support", "Basic reporting"]),
        Tier::new("professional", "Professional", BillingType::MonthlyRetainer)
            .with_prices(79.0, 0.0)
            .with_bullets([
                "Everything in Starter",
                "Email support",
                "Advanced reporting",
                "Team seats",
            ])
            .superseding("starter")
            .popular(),
        Tier::new("enterprise", "Enterprise", BillingType::MonthlyRetainer)
            .with_prices(199.0, 0.0)
            .with_bullets([
                "Everything in Professional",
                "Dedicated account manager",
                "Custom integrations",
                "Uptime SLA",
            ])
            .superseding("professional"),
    ];
    TierTemplate {
        tiers,
        selected: TierId::new("professional"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(template: &TierTemplate) -> Vec<&str> {
        template.tiers.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn product_template_is_fixed_price_only() {
        let template = recommended_tiers(OfferingType::Product);
        assert_eq!(names(&template), vec!["Base", "Advanced"]);
        assert!(template
            .tiers
            .iter()
            .all(|t| t.billing_type == BillingType::FixedPrice));
        assert_eq!(template.selected, TierId::new("base"));
    }

    #[test]
    fn every_template_respects_billing_rules() {
        for offering in OfferingType::ALL {
            let template = recommended_tiers(offering);
            for tier in &template.tiers {
                assert!(
                    tier.billing_type.is_allowed_for(offering),
                    "{offering}: {} uses {}",
                    tier.id,
                    tier.billing_type
                );
            }
        }
    }

    #[test]
    fn each_tier_supersedes_its_predecessor() {
        for offering in OfferingType::ALL {
            let template = recommended_tiers(offering);
            assert_eq!(template.tiers[0].supersede_tier, None);
            for pair in template.tiers.windows(2) {
                assert_eq!(pair[1].supersede_tier.as_ref(), Some(&pair[0].id));
            }
        }
    }

    #[test]
    fn selected_tier_exists_in_template() {
        for offering in OfferingType::ALL {
            let template = recommended_tiers(offering);
            assert!(template.tiers.iter().any(|t| t.id == template.selected));
        }
    }
}
