//! GenerateReportHandler - submits a completed assessment for an AI talent report.

use std::sync::Arc;
use thiserror::Error;

use crate::application::Notice;
use crate::domain::assessment::AssessmentSubmission;
use crate::domain::foundation::DomainError;
use crate::ports::{
    GatewayError, HapticFeedback, HapticNotification, TalentReport, TalentReportService,
};

/// Shown when the report service or its gateway timed out.
pub const REPORT_TIMEOUT_MESSAGE: &str = "AI analysis timed out. Please try again.";

/// Shown for every other generation failure.
pub const REPORT_FAILED_MESSAGE: &str = "Failed to generate report. Try again.";

/// Shown after a report was generated.
pub const REPORT_GENERATED_MESSAGE: &str = "Report generated successfully!";

/// Command to generate a report from a finished session.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub submission: AssessmentSubmission,
}

/// Result of successful generation.
#[derive(Debug, Clone)]
pub struct GenerateReportResult {
    pub report: TalentReport,
    pub notice: Notice,
}

/// Generation failed; `notice` is ready to show and always offers a retry.
#[derive(Debug, Clone, Error)]
#[error("talent report generation failed: {source}")]
pub struct GenerateReportError {
    pub source: DomainError,
    pub notice: Notice,
}

impl From<GatewayError> for GenerateReportError {
    fn from(err: GatewayError) -> Self {
        let message = if err.is_timeout_or_gateway() {
            REPORT_TIMEOUT_MESSAGE
        } else {
            REPORT_FAILED_MESSAGE
        };
        Self {
            notice: Notice::error(message).retryable(),
            source: err.into(),
        }
    }
}

/// Handler for report generation.
pub struct GenerateReportHandler {
    reports: Arc<dyn TalentReportService>,
    haptics: Arc<dyn HapticFeedback>,
}

impl GenerateReportHandler {
    pub fn new(reports: Arc<dyn TalentReportService>, haptics: Arc<dyn HapticFeedback>) -> Self {
        Self { reports, haptics }
    }

    pub async fn handle(
        &self,
        cmd: GenerateReportCommand,
    ) -> Result<GenerateReportResult, GenerateReportError> {
        let submission = cmd.submission;

        match self.reports.generate_report(&submission).await {
            Ok(report) => {
                tracing::info!(
                    athlete_id = %submission.athlete_id,
                    report_id = %report.id,
                    "talent report generated"
                );
                self.haptics.notify(HapticNotification::Success);
                Ok(GenerateReportResult {
                    report,
                    notice: Notice::success(REPORT_GENERATED_MESSAGE),
                })
            }
            Err(e) => {
                tracing::error!(
                    athlete_id = %submission.athlete_id,
                    assessment_id = %submission.assessment_id,
                    code = %e.code(),
                    error = %e,
                    "talent report generation failed"
                );
                Err(e.into())
            }
        }
    }
}
