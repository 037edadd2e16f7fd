//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two price ranges
//! with the same bounds are the same price range; two tiers with the same prices
//! are still different tiers.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceRange {
///     low: f64,
///     high: f64,
/// }
///
/// impl ValueObject for PriceRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
