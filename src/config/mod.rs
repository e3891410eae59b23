//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SPORTAN` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use sportan_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend at {}", config.api.base_url);
//! ```

mod api;
mod assessment;
mod auth;
mod error;
mod logging;

pub use api::ApiConfig;
pub use assessment::AssessmentConfig;
pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{Environment, LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Coaching backend connection
    #[serde(default)]
    pub api: ApiConfig,

    /// Supabase project, when the host hands auth settings to this crate.
    /// Bearer tokens themselves always come from the host's `AccessTokenProvider`.
    #[serde(default)]
    pub auth: Option<AuthConfig>,

    /// Warmup/cooldown timers
    #[serde(default)]
    pub assessment: AssessmentConfig,

    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SPORTAN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SPORTAN__API__BASE_URL=https://api.sportan.app` -> `api.base_url`
    /// - `SPORTAN__AUTH__SUPABASE_ANON_KEY=...` -> `auth.supabase_anon_key`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Only one of the two auth variables is set
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SPORTAN")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        if let Some(auth) = &self.auth {
            auth.validate(&self.logging.environment)?;
        }
        self.assessment.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.logging.is_production()
    }
}
