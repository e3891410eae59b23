//! TalentReportService port - AI talent recognition reports.
//!
//! Reports are generated by the backend from a completed assessment. Only the
//! latest report per athlete is retrievable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::AssessmentSubmission;
use crate::domain::foundation::{AthleteId, ReportId, Timestamp};

use super::GatewayError;

/// A generated talent report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentReport {
    pub id: ReportId,
    pub athlete_id: AthleteId,
    pub report_text: String,
    pub created_at: Timestamp,
}

/// Generation and retrieval of talent reports.
#[async_trait]
pub trait TalentReportService: Send + Sync {
    /// Fetches the most recent report. `Ok(None)` when none has been generated.
    async fn latest_report(
        &self,
        athlete_id: &AthleteId,
    ) -> Result<Option<TalentReport>, GatewayError>;

    /// Submits a completed assessment and returns the generated report.
    ///
    /// Generation can take long enough to hit upstream timeouts; callers should
    /// check [`GatewayError::is_timeout_or_gateway`] to tailor the retry message.
    async fn generate_report(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<TalentReport, GatewayError>;
}
