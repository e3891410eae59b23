//! Assessment timer configuration

use serde::Deserialize;
use std::time::Duration;

use crate::domain::assessment::{COOLDOWN_SECS, WARMUP_SECS};

use super::error::ValidationError;

const MAX_TIMER_SECS: u32 = 60 * 60;

/// Wizard timer settings
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Warmup countdown length in seconds
    #[serde(default = "default_warmup")]
    pub warmup_secs: u32,

    /// Cooldown countdown length in seconds
    #[serde(default = "default_cooldown")]
    pub cooldown_secs: u32,

    /// Countdown tick period in milliseconds
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

impl AssessmentConfig {
    /// Get tick period as Duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate timer configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for secs in [self.warmup_secs, self.cooldown_secs] {
            if secs == 0 || secs > MAX_TIMER_SECS {
                return Err(ValidationError::InvalidTimerDuration);
            }
        }
        if !(10..=10_000).contains(&self.tick_interval_ms) {
            return Err(ValidationError::InvalidTickInterval);
        }
        Ok(())
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            warmup_secs: default_warmup(),
            cooldown_secs: default_cooldown(),
            tick_interval_ms: default_tick_interval(),
        }
    }
}

fn default_warmup() -> u32 {
    WARMUP_SECS
}

fn default_cooldown() -> u32 {
    COOLDOWN_SECS
}

fn default_tick_interval() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_config_defaults() {
        let config = AssessmentConfig::default();
        assert_eq!(config.warmup_secs, 900);
        assert_eq!(config.cooldown_secs, 600);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_warmup() {
        let config = AssessmentConfig {
            warmup_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimerDuration));
    }

    #[test]
    fn test_validation_rejects_tiny_tick() {
        let config = AssessmentConfig {
            tick_interval_ms: 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTickInterval));
    }
}
