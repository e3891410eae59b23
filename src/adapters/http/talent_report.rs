//! HTTP implementation of the TalentReportService port.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::assessment::AssessmentSubmission;
use crate::domain::foundation::{AthleteId, ReportId, Timestamp};
use crate::ports::{GatewayError, TalentReport, TalentReportService};

use super::ApiClient;

/// Report record as returned by the talent recognition endpoints.
#[derive(Debug, Deserialize)]
struct TalentReportRecord {
    id: ReportId,
    athlete_id: AthleteId,
    report_text: String,
    created_at: String,
}

impl TryFrom<TalentReportRecord> for TalentReport {
    type Error = GatewayError;

    fn try_from(record: TalentReportRecord) -> Result<Self, Self::Error> {
        let created_at = Timestamp::parse(&record.created_at)
            .map_err(|e| GatewayError::parse(e.to_string()))?;
        Ok(TalentReport {
            id: record.id,
            athlete_id: record.athlete_id,
            report_text: record.report_text,
            created_at,
        })
    }
}

/// Talent reports through `/coach/athletes/{id}/ai/talent-recognition`.
pub struct HttpTalentReportService {
    client: Arc<ApiClient>,
}

impl HttpTalentReportService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn path(athlete_id: &AthleteId) -> String {
        format!("/coach/athletes/{}/ai/talent-recognition", athlete_id)
    }
}

#[async_trait]
impl TalentReportService for HttpTalentReportService {
    async fn latest_report(
        &self,
        athlete_id: &AthleteId,
    ) -> Result<Option<TalentReport>, GatewayError> {
        match self
            .client
            .get_json::<TalentReportRecord>(&Self::path(athlete_id))
            .await
        {
            Ok(record) => record.try_into().map(Some),
            Err(GatewayError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn generate_report(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<TalentReport, GatewayError> {
        tracing::info!(
            athlete_id = %submission.athlete_id,
            assessment_id = %submission.assessment_id,
            "requesting talent report"
        );
        let record: TalentReportRecord = self
            .client
            .post_json(&Self::path(&submission.athlete_id), submission)
            .await?;
        record.try_into()
    }
}
