//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a wizard session (one draft per session).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("SessionId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Identifier of a pricing tier.
///
/// Template tiers use readable slugs (`"professional"`); tiers added by hand get
/// a generated `tier-` id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(String);

/// Identifier of an offering image (`thumbnail-…` / `gallery-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap an id string as-is.
            ///
            /// Emptiness is only checked by `FromStr`; the store treats ids as
            /// opaque lookup keys.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a collision-resistant id: `prefix` followed by a
            /// time-ordered UUIDv7 in simple (hyphen-less) form.
            pub fn generate(prefix: &str) -> Self {
                Self(format!("{prefix}{}", Uuid::now_v7().simple()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty")));
                }
                Ok(Self(trimmed.to_owned()))
            }
        }
    };
}

impl_string_newtype!(TierId, "TierId");
impl_string_newtype!(ImageId, "ImageId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_keep_prefix_and_differ() {
        let a = ImageId::generate("gallery-");
        let b = ImageId::generate("gallery-");
        assert!(a.as_str().starts_with("gallery-"));
        assert_ne!(a, b);
    }

    #[test]
    fn parsing_rejects_blank_ids() {
        assert!(matches!("  ".parse::<TierId>(), Err(DomainError::InvalidId(_))));
        assert_eq!(" base ".parse::<TierId>().unwrap(), TierId::new("base"));
    }

    #[test]
    fn session_id_rejects_garbage() {
        let err = "not-a-uuid".parse::<SessionId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn string_ids_serialize_transparently() {
        let id = TierId::new("professional");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"professional\"");
    }
}
