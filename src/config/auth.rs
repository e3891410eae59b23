//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::logging::Environment;

/// Authentication configuration (Supabase)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Supabase project URL
    pub supabase_url: String,

    /// Supabase anonymous (public) API key
    pub supabase_anon_key: Secret<String>,
}

impl AuthConfig {
    pub fn new(supabase_url: impl Into<String>, supabase_anon_key: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            supabase_anon_key: Secret::new(supabase_anon_key.into()),
        }
    }

    /// Validate authentication configuration
    ///
    /// In production, requires HTTPS for the Supabase URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.supabase_url.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_URL"));
        }
        if self.supabase_anon_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_ANON_KEY"));
        }

        if *environment == Environment::Production && !self.supabase_url.starts_with("https://") {
            return Err(ValidationError::SupabaseUrlMustBeHttps);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_missing_url() {
        let config = AuthConfig::new("", "anon");
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("SUPABASE_URL"))
        );
    }

    #[test]
    fn test_validation_missing_anon_key() {
        let config = AuthConfig::new("https://project.supabase.co", "");
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("SUPABASE_ANON_KEY"))
        );
    }

    #[test]
    fn test_validation_production_requires_https() {
        let config = AuthConfig::new("http://localhost:54321", "anon");
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::SupabaseUrlMustBeHttps)
        );
    }

    #[test]
    fn test_anon_key_is_redacted_in_debug() {
        let config = AuthConfig::new("https://project.supabase.co", "super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
