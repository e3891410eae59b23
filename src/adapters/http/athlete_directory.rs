//! HTTP implementation of the AthleteDirectory port.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::foundation::{AthleteId, Timestamp};
use crate::ports::{AthleteDirectory, AthleteProfile, GatewayError};

use super::ApiClient;

/// Athlete record as returned by `GET /coach/athletes/{id}`.
#[derive(Debug, Deserialize)]
struct AthleteRecord {
    id: AthleteId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<AthleteRecord> for AthleteProfile {
    fn from(record: AthleteRecord) -> Self {
        let joined_at = record.created_at.as_deref().and_then(|raw| {
            Timestamp::parse(raw)
                .map_err(|e| {
                    tracing::debug!(value = raw, error = %e, "ignoring unparseable created_at")
                })
                .ok()
        });

        AthleteProfile {
            id: record.id,
            name: record
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            group_id: record.group_id.filter(|g| !g.is_empty()),
            email: record.email,
            phone: record.phone,
            joined_at,
        }
    }
}

/// Looks athletes up through the coach API.
pub struct HttpAthleteDirectory {
    client: Arc<ApiClient>,
}

impl HttpAthleteDirectory {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AthleteDirectory for HttpAthleteDirectory {
    async fn find_athlete(&self, id: &AthleteId) -> Result<Option<AthleteProfile>, GatewayError> {
        let path = format!("/coach/athletes/{}", id);
        match self.client.get_json::<AthleteRecord>(&path).await {
            Ok(record) => Ok(Some(record.into())),
            Err(GatewayError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_defaults_to_unknown() {
        let record: AthleteRecord = serde_json::from_str(
            r#"{"id": "6a2f41a3-c54c-4f2a-8a5e-6d2f6e2b9a10", "name": "", "email": "a@b.c"}"#,
        )
        .unwrap();

        let profile = AthleteProfile::from(record);

        assert_eq!(profile.name, "Unknown");
        assert_eq!(profile.email.as_deref(), Some("a@b.c"));
        assert_eq!(profile.group_id, None);
    }

    #[test]
    fn created_at_becomes_joined_at() {
        let record: AthleteRecord = serde_json::from_str(
            r#"{"id": "6a2f41a3-c54c-4f2a-8a5e-6d2f6e2b9a10", "name": "Maya",
                "group_id": "g-1", "created_at": "2024-03-01T09:30:00Z"}"#,
        )
        .unwrap();

        let profile = AthleteProfile::from(record);

        assert_eq!(profile.name, "Maya");
        assert_eq!(profile.group_id.as_deref(), Some("g-1"));
        assert!(profile.joined_at.is_some());
    }

    #[test]
    fn bad_created_at_is_dropped() {
        let record: AthleteRecord = serde_json::from_str(
            r#"{
                "id": "6a2f41a3-c54c-4f2a-8a5e-6d2f6e2b9a10",
                "name": "Maya",
                "created_at": "yesterday"
            }"#,
        )
        .unwrap();

        assert_eq!(AthleteProfile::from(record).joined_at, None);
    }
}
