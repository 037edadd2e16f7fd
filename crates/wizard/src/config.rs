//! Environment-driven configuration for a wizard session.

use offerwiz_core::{DomainError, DomainResult};

pub const DEFAULT_SESSION_KEY: &str = "offering-wizard:session";
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Session-storage key of the "wizard already running" marker.
    pub session_key: String,
    /// Currency preset on tiers created with [`add_blank_tier`](crate::WizardState::add_blank_tier).
    pub default_currency: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl WizardConfig {
    /// Read `OFFERWIZ_SESSION_KEY` and `OFFERWIZ_DEFAULT_CURRENCY`, keeping
    /// defaults for unset variables.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(key) = lookup("OFFERWIZ_SESSION_KEY") {
            let key = key.trim();
            if key.is_empty() {
                return Err(DomainError::config("OFFERWIZ_SESSION_KEY must not be empty"));
            }
            config.session_key = key.to_string();
        }

        if let Some(currency) = lookup("OFFERWIZ_DEFAULT_CURRENCY") {
            let currency = currency.trim().to_ascii_uppercase();
            if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(DomainError::config(format!(
                    "OFFERWIZ_DEFAULT_CURRENCY must be a 3-letter code, got {currency:?}"
                )));
            }
            config.default_currency = currency;
        }

        Ok(config)
    }
}
