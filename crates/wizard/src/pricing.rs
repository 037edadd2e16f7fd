//! Read-only price summaries over a tier sequence.

use serde::Serialize;

use offerwiz_core::ValueObject;

use crate::tier::Tier;

/// Unit shown when no tier provides one.
pub const DEFAULT_PRICE_UNIT: &str = "hr";

pub fn has_quote_only_tier(tiers: &[Tier]) -> bool {
    tiers.iter().any(Tier::request_quote_only)
}

/// Smallest positive starting price, or 0 when any tier is quote-only or
/// nothing is priced.
pub fn lowest_price(tiers: &[Tier]) -> f64 {
    if has_quote_only_tier(tiers) {
        return 0.0;
    }
    tiers
        .iter()
        .map(Tier::price_from)
        .filter(|price| *price > 0.0)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Largest of every starting and ending price, or 0 when any tier is quote-only.
pub fn highest_price(tiers: &[Tier]) -> f64 {
    if has_quote_only_tier(tiers) {
        return 0.0;
    }
    tiers
        .iter()
        .flat_map(|tier| [tier.price_from(), tier.price_to()])
        .fold(0.0, f64::max)
}

/// Unit of the first tier, or [`DEFAULT_PRICE_UNIT`].
pub fn price_unit(tiers: &[Tier]) -> &str {
    tiers
        .first()
        .map(|tier| tier.price_unit.trim())
        .filter(|unit| !unit.is_empty())
        .unwrap_or(DEFAULT_PRICE_UNIT)
}

/// Price span across every tier, as shown on the offering card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
    pub unit: String,
    pub currency: Option<String>,
    pub quote_only: bool,
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub fn from_tiers(tiers: &[Tier]) -> Self {
        Self {
            low: lowest_price(tiers),
            high: highest_price(tiers),
            unit: price_unit(tiers).to_string(),
            currency: tiers
                .first()
                .map(|tier| tier.currency.trim().to_string())
                .filter(|currency| !currency.is_empty()),
            quote_only: has_quote_only_tier(tiers),
        }
    }

    /// Human-readable label, e.g. `USD 500 - 1000 / hr`.
    pub fn label(&self) -> String {
        if self.quote_only {
            return "Request a quote".to_string();
        }
        if self.high <= 0.0 {
            return "Pricing not set".to_string();
        }
        let prefix = self
            .currency
            .as_deref()
            .map(|currency| format!("{currency} "))
            .unwrap_or_default();
        let low = format_amount(self.low);
        let high = format_amount(self.high);
        if self.low <= 0.0 || low == high {
            format!("{prefix}{high} / {}", self.unit)
        } else {
            format!("{prefix}{low} - {high} / {}", self.unit)
        }
    }
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
