//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured level. HTTP client noise is
//! always capped at `warn`.

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

const NOISY_TARGETS: &[&str] = &["hyper=warn", "reqwest=warn"];

/// Failure installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter from `RUST_LOG` or the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    let base = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| config.level.clone());
    let mut filter =
        EnvFilter::try_new(&base).map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?;

    for directive in NOISY_TARGETS {
        let directive = directive
            .parse()
            .map_err(|e: tracing_subscriber::filter::ParseError| {
                TelemetryError::InvalidFilter(e.to_string())
            })?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

/// Installs the global tracing subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(build_filter(config)?);

    match config.format() {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(true).json())
            .try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init()?,
    }

    tracing::debug!(environment = ?config.environment, "tracing initialised");
    Ok(())
}
