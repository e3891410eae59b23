//! Mock TalentReportService for testing.
//!
//! # Features
//!
//! - Queued responses for `generate_report`, consumed in order
//! - Error injection for timeout and failure paths
//! - Simulated latency
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let service = MockTalentReportService::new()
//!     .with_error(GatewayError::gateway(504))
//!     .with_report_text("Strong balance and running base.");
//!
//! assert!(service.generate_report(&submission).await.is_err());
//! assert!(service.generate_report(&submission).await.is_ok());
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::assessment::AssessmentSubmission;
use crate::domain::foundation::{AthleteId, ReportId, Timestamp};
use crate::ports::{GatewayError, TalentReport, TalentReportService};

/// A configured `generate_report` outcome.
#[derive(Debug, Clone)]
enum MockOutcome {
    Report { text: String },
    Error(GatewayError),
}

/// Mock report service.
///
/// Generated reports become the athlete's latest report, as on the backend.
#[derive(Debug, Clone, Default)]
pub struct MockTalentReportService {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    latest: Arc<Mutex<HashMap<AthleteId, TalentReport>>>,
    latest_error: Arc<Mutex<Option<GatewayError>>>,
    delay: Duration,
    submissions: Arc<Mutex<Vec<AssessmentSubmission>>>,
}

impl MockTalentReportService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful generation with the given text.
    pub fn with_report_text(self, text: impl Into<String>) -> Self {
        self.push(MockOutcome::Report { text: text.into() });
        self
    }

    /// Queues a failed generation.
    pub fn with_error(self, error: GatewayError) -> Self {
        self.push(MockOutcome::Error(error));
        self
    }

    /// Seeds the latest report for an athlete.
    pub fn with_latest(self, report: TalentReport) -> Self {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(report.athlete_id, report);
        self
    }

    /// Makes `latest_report` fail with `error`.
    pub fn with_latest_error(self, error: GatewayError) -> Self {
        *self.latest_error.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of `generate_report` calls made.
    pub fn call_count(&self) -> usize {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Submissions received, in call order.
    pub fn submissions(&self) -> Vec<AssessmentSubmission> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, outcome: MockOutcome) {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
    }

    fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Report {
                text: "Mock talent report".to_string(),
            })
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl TalentReportService for MockTalentReportService {
    async fn latest_report(
        &self,
        athlete_id: &AthleteId,
    ) -> Result<Option<TalentReport>, GatewayError> {
        self.simulate_latency().await;

        if let Some(error) = self
            .latest_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        Ok(self
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(athlete_id)
            .cloned())
    }

    async fn generate_report(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<TalentReport, GatewayError> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());

        self.simulate_latency().await;

        match self.next_outcome() {
            MockOutcome::Report { text } => {
                let report = TalentReport {
                    id: ReportId::new(),
                    athlete_id: submission.athlete_id,
                    report_text: text,
                    created_at: Timestamp::now(),
                };
                self.latest
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(report.athlete_id, report.clone());
                Ok(report)
            }
            MockOutcome::Error(error) => Err(error),
        }
    }
}
