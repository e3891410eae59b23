//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid API base URL")]
    InvalidApiUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Supabase URL must use HTTPS in production")]
    SupabaseUrlMustBeHttps,

    #[error("Timer duration must be between 1 second and 1 hour")]
    InvalidTimerDuration,

    #[error("Tick interval must be between 10ms and 10s")]
    InvalidTickInterval,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
