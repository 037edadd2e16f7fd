//! Offering-level enumerations: what is being sold and how its card looks.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use offerwiz_core::DomainError;

/// Kind of sellable item the wizard is composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferingType {
    Product,
    Service,
    Subscription,
}

impl OfferingType {
    pub const ALL: [OfferingType; 3] = [
        OfferingType::Product,
        OfferingType::Service,
        OfferingType::Subscription,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OfferingType::Product => "product",
            OfferingType::Service => "service",
            OfferingType::Subscription => "subscription",
        }
    }

    /// Capitalized form used in headings ("Service").
    pub fn label(&self) -> &'static str {
        match self {
            OfferingType::Product => "Product",
            OfferingType::Service => "Service",
            OfferingType::Subscription => "Subscription",
        }
    }
}

impl core::fmt::Display for OfferingType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "product" => Ok(OfferingType::Product),
            "service" => Ok(OfferingType::Service),
            "subscription" => Ok(OfferingType::Subscription),
            _ => Err(DomainError::unknown_variant("offering type", s)),
        }
    }
}

/// Card background used when the offering has no thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackColor {
    #[default]
    Burgundy,
    Navy,
    Forest,
    Slate,
    Amber,
    Plum,
}

impl FallbackColor {
    /// The fixed palette, in picker order.
    pub const PALETTE: [FallbackColor; 6] = [
        FallbackColor::Burgundy,
        FallbackColor::Navy,
        FallbackColor::Forest,
        FallbackColor::Slate,
        FallbackColor::Amber,
        FallbackColor::Plum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackColor::Burgundy => "burgundy",
            FallbackColor::Navy => "navy",
            FallbackColor::Forest => "forest",
            FallbackColor::Slate => "slate",
            FallbackColor::Amber => "amber",
            FallbackColor::Plum => "plum",
        }
    }
}

impl core::fmt::Display for FallbackColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FallbackColor::PALETTE
            .into_iter()
            .find(|color| color.as_str() == wanted)
            .ok_or_else(|| DomainError::unknown_variant("fallback color", s))
    }
}
