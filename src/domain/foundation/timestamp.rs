//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Offset-less form the backend emits for `created_at` columns.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parses a timestamp as returned by the backend API.
    ///
    /// Accepts RFC 3339, and falls back to an offset-less
    /// `YYYY-MM-DDTHH:MM:SS[.ffffff]` which is read as UTC.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(value, NAIVE_FORMAT)
            .map(|naive| Self(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)))
            .map_err(|e| ValidationError::invalid_format("timestamp", e.to_string()))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_is_ordered() {
        let before = Timestamp::now();
        let ts = Timestamp::now();
        let after = Timestamp::now();

        assert!(before <= ts);
        assert!(ts <= after);
    }

    #[test]
    fn parse_accepts_rfc3339_with_offset() {
        let ts = Timestamp::parse("2025-03-01T10:15:00+01:00").unwrap();
        assert_eq!(ts, Timestamp::parse("2025-03-01T09:15:00Z").unwrap());
    }

    #[test]
    fn parse_reads_offsetless_value_as_utc() {
        let naive = Timestamp::parse("2024-05-10T14:00:00.123456").unwrap();
        let explicit = Timestamp::parse("2024-05-10T14:00:00.123456Z").unwrap();
        assert_eq!(naive, explicit);

        let whole_seconds = Timestamp::parse("2024-05-10T14:00:00").unwrap();
        assert!(whole_seconds < naive);
    }

    #[test]
    fn parse_rejects_garbage() {
        let result = Timestamp::parse("yesterday");
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));

        let date_only = Timestamp::parse("2024-05-10");
        assert!(date_only.is_err());
    }

    #[test]
    fn timestamp_serializes_transparently() {
        let ts = Timestamp::parse("2025-03-01T09:00:00").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.starts_with("\"2025-03-01T09:00:00"));
    }
}
