//! AthleteDirectory port - athlete profile lookup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AthleteId, Timestamp};

use super::GatewayError;

/// Athlete profile as shown in the assessment header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub id: AthleteId,
    pub name: String,
    pub group_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub joined_at: Option<Timestamp>,
}

impl AthleteProfile {
    /// Creates a profile with only the required fields.
    pub fn new(id: AthleteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group_id: None,
            email: None,
            phone: None,
            joined_at: None,
        }
    }
}

/// Read access to athlete profiles.
#[async_trait]
pub trait AthleteDirectory: Send + Sync {
    /// Fetches an athlete's profile. `Ok(None)` when the athlete does not exist.
    async fn find_athlete(&self, id: &AthleteId) -> Result<Option<AthleteProfile>, GatewayError>;
}
