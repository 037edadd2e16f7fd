//! Pricing tiers: the entity, its billing rules and single-field updates.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use offerwiz_core::{DomainError, Entity, TierId};

use crate::offering::OfferingType;

/// How a tier is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingType {
    PerProject,
    Hourly,
    MonthlyRetainer,
    FixedPrice,
}

impl BillingType {
    pub const ALL: [BillingType; 4] = [
        BillingType::PerProject,
        BillingType::Hourly,
        BillingType::MonthlyRetainer,
        BillingType::FixedPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingType::PerProject => "per-project",
            BillingType::Hourly => "hourly",
            BillingType::MonthlyRetainer => "monthly-retainer",
            BillingType::FixedPrice => "fixed-price",
        }
    }

    /// Billing types a tier of the given offering may use.
    ///
    /// Products are sold at a fixed price; everything else is billed over time
    /// or per engagement.
    pub fn allowed_for(offering: OfferingType) -> &'static [BillingType] {
        match offering {
            OfferingType::Product => &[BillingType::FixedPrice],
            OfferingType::Service | OfferingType::Subscription => &[
                BillingType::PerProject,
                BillingType::Hourly,
                BillingType::MonthlyRetainer,
            ],
        }
    }

    pub fn is_allowed_for(self, offering: OfferingType) -> bool {
        Self::allowed_for(offering).contains(&self)
    }

    /// Billing type preselected for a new tier.
    pub fn default_for(offering: OfferingType) -> BillingType {
        match offering {
            OfferingType::Product => BillingType::FixedPrice,
            OfferingType::Service => BillingType::PerProject,
            OfferingType::Subscription => BillingType::MonthlyRetainer,
        }
    }

    /// Price unit shown next to amounts billed this way.
    pub fn default_unit(&self) -> &'static str {
        match self {
            BillingType::PerProject => "project",
            BillingType::Hourly => "hr",
            BillingType::MonthlyRetainer => "mo",
            BillingType::FixedPrice => "unit",
        }
    }
}

impl core::fmt::Display for BillingType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        BillingType::ALL
            .into_iter()
            .find(|billing| billing.as_str() == wanted)
            .ok_or_else(|| DomainError::unknown_variant("billing type", s))
    }
}

/// One pricing/feature bundle of an offering.
///
/// Prices are never negative, and both are held at zero while the tier is
/// request-quote-only. `supersede_tier` is a weak reference and may name a
/// tier that no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TierRecord")]
pub struct Tier {
    pub id: TierId,
    pub name: String,
    pub display_name_override: String,
    pub supersede_tier: Option<TierId>,
    pub bullet_points: Vec<String>,
    pub is_popular: bool,
    pub billing_type: BillingType,
    pub has_price_range: bool,
    price_from: f64,
    price_to: f64,
    pub currency: String,
    pub price_unit: String,
    request_quote_only: bool,
}

/// Wire shape of a [`Tier`]; converted through the setters so the price
/// invariants hold for deserialized tiers too.
#[derive(Deserialize)]
struct TierRecord {
    id: TierId,
    name: String,
    #[serde(default)]
    display_name_override: String,
    #[serde(default)]
    supersede_tier: Option<TierId>,
    #[serde(default)]
    bullet_points: Vec<String>,
    #[serde(default)]
    is_popular: bool,
    billing_type: BillingType,
    #[serde(default)]
    has_price_range: bool,
    #[serde(default)]
    price_from: f64,
    #[serde(default)]
    price_to: f64,
    currency: String,
    price_unit: String,
    #[serde(default)]
    request_quote_only: bool,
}

impl From<TierRecord> for Tier {
    fn from(record: TierRecord) -> Self {
        let mut tier = Tier::new(record.id, record.name, record.billing_type);
        tier.display_name_override = record.display_name_override;
        tier.supersede_tier = record.supersede_tier;
        tier.bullet_points = record.bullet_points;
        tier.is_popular = record.is_popular;
        tier.has_price_range = record.has_price_range;
        tier.currency = record.currency;
        tier.price_unit = record.price_unit;
        tier.set_price_from(record.price_from);
        tier.set_price_to(record.price_to);
        tier.set_request_quote_only(record.request_quote_only);
        tier
    }
}

/// A single named tier field together with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum TierField {
    Name(String),
    DisplayNameOverride(String),
    SupersedeTier(Option<TierId>),
    BulletPoints(Vec<String>),
    IsPopular(bool),
    BillingType(BillingType),
    HasPriceRange(bool),
    PriceFrom(f64),
    PriceTo(f64),
    Currency(String),
    PriceUnit(String),
    RequestQuoteOnly(bool),
}

impl TierField {
    /// Field name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            TierField::Name(_) => "name",
            TierField::DisplayNameOverride(_) => "display_name_override",
            TierField::SupersedeTier(_) => "supersede_tier",
            TierField::BulletPoints(_) => "bullet_points",
            TierField::IsPopular(_) => "is_popular",
            TierField::BillingType(_) => "billing_type",
            TierField::HasPriceRange(_) => "has_price_range",
            TierField::PriceFrom(_) => "price_from",
            TierField::PriceTo(_) => "price_to",
            TierField::Currency(_) => "currency",
            TierField::PriceUnit(_) => "price_unit",
            TierField::RequestQuoteOnly(_) => "request_quote_only",
        }
    }
}

fn sanitize_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl Tier {
    pub fn new(id: impl Into<TierId>, name: impl Into<String>, billing_type: BillingType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name_override: String::new(),
            supersede_tier: None,
            bullet_points: Vec::new(),
            is_popular: false,
            billing_type,
            has_price_range: false,
            price_from: 0.0,
            price_to: 0.0,
            currency: "USD".to_string(),
            price_unit: billing_type.default_unit().to_string(),
            request_quote_only: false,
        }
    }

    /// An unpriced tier with a billing type valid for `offering`.
    pub fn blank(id: impl Into<TierId>, offering: OfferingType, currency: &str) -> Self {
        let mut tier = Self::new(id, "New Tier", BillingType::default_for(offering));
        tier.currency = currency.to_string();
        tier.bullet_points.push(String::new());
        tier
    }

    pub fn with_prices(mut self, from: f64, to: f64) -> Self {
        self.set_price_from(from);
        self.set_price_to(to);
        self.has_price_range = self.price_to > self.price_from;
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullet_points = bullets.into_iter().map(Into::into).collect();
        self
    }

    pub fn superseding(mut self, predecessor: impl Into<TierId>) -> Self {
        self.supersede_tier = Some(predecessor.into());
        self
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    pub fn quote_only(mut self) -> Self {
        self.set_request_quote_only(true);
        self
    }

    pub fn price_from(&self) -> f64 {
        self.price_from
    }

    pub fn price_to(&self) -> f64 {
        self.price_to
    }

    pub fn request_quote_only(&self) -> bool {
        self.request_quote_only
    }

    /// Name shown to buyers: the override when set, otherwise the tier name.
    pub fn display_name(&self) -> &str {
        if self.display_name_override.trim().is_empty() {
            &self.name
        } else {
            &self.display_name_override
        }
    }

    /// Writes are held at zero while the tier is quote-only.
    pub fn set_price_from(&mut self, value: f64) {
        self.price_from = if self.request_quote_only {
            0.0
        } else {
            sanitize_price(value)
        };
    }

    /// Writes are held at zero while the tier is quote-only.
    pub fn set_price_to(&mut self, value: f64) {
        self.price_to = if self.request_quote_only {
            0.0
        } else {
            sanitize_price(value)
        };
    }

    /// Switching quote-only on zeroes both prices; switching it off leaves them at zero.
    pub fn set_request_quote_only(&mut self, on: bool) {
        self.request_quote_only = on;
        if on {
            self.price_from = 0.0;
            self.price_to = 0.0;
        }
    }

    /// Replace one field, keeping every other one.
    pub fn apply(&mut self, field: TierField) {
        match field {
            TierField::Name(v) => self.name = v,
            TierField::DisplayNameOverride(v) => self.display_name_override = v,
            TierField::SupersedeTier(v) => self.supersede_tier = v,
            TierField::BulletPoints(v) => self.bullet_points = v,
            TierField::IsPopular(v) => self.is_popular = v,
            TierField::BillingType(v) => self.billing_type = v,
            TierField::HasPriceRange(v) => self.has_price_range = v,
            TierField::PriceFrom(v) => self.set_price_from(v),
            TierField::PriceTo(v) => self.set_price_to(v),
            TierField::Currency(v) => self.currency = v,
            TierField::PriceUnit(v) => self.price_unit = v,
            TierField::RequestQuoteOnly(v) => self.set_request_quote_only(v),
        }
    }

    pub fn add_bullet_point(&mut self) {
        self.bullet_points.push(String::new());
    }

    /// Out-of-range indices change nothing.
    pub fn update_bullet_point(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.bullet_points.get_mut(index) {
            *slot = text.into();
        }
    }

    /// Out-of-range indices remove nothing.
    pub fn remove_bullet_point(&mut self, index: usize) {
        if index < self.bullet_points.len() {
            self.bullet_points.remove(index);
        }
    }
}

impl Entity for Tier {
    type Id = TierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
