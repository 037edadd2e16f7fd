//! Tracing/logging initialization.

use core::str::FromStr;

use offerwiz_core::{DomainError, DomainResult};
use tracing_subscriber::EnvFilter;

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable, multi-line.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(DomainError::config(format!(
                "OFFERWIZ_LOG_FORMAT must be `json` or `pretty`, got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            default_filter: "info".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `OFFERWIZ_LOG_FORMAT`; unset means the default format.
    pub fn from_env() -> DomainResult<Self> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("OFFERWIZ_LOG_FORMAT") {
            config.format = raw.parse()?;
        }
        Ok(config)
    }

    /// Like [`from_env`](Self::from_env) but falls back to defaults on bad input.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            eprintln!("ignoring invalid observability config: {err}");
            Self::default()
        })
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
