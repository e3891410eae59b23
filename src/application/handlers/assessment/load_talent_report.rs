//! LoadTalentReportHandler - loads the talent report screen.
//!
//! The athlete profile and the latest report are fetched concurrently and
//! fail independently, so a broken report endpoint still shows the athlete.

use std::sync::Arc;

use crate::application::Notice;
use crate::domain::foundation::AthleteId;
use crate::ports::{AthleteDirectory, AthleteProfile, TalentReport, TalentReportService};

/// Query for the talent report screen.
#[derive(Debug, Clone)]
pub struct LoadTalentReportQuery {
    pub athlete_id: AthleteId,
}

/// Whatever could be loaded, plus one notice per failed fetch.
#[derive(Debug, Clone, Default)]
pub struct TalentReportView {
    pub profile: Option<AthleteProfile>,
    pub report: Option<TalentReport>,
    pub notices: Vec<Notice>,
}

impl TalentReportView {
    /// True when the report can be shared (both athlete and report loaded).
    pub fn can_share(&self) -> bool {
        self.profile.is_some() && self.report.is_some()
    }
}

/// Handler for the talent report screen.
pub struct LoadTalentReportHandler {
    athletes: Arc<dyn AthleteDirectory>,
    reports: Arc<dyn TalentReportService>,
}

impl LoadTalentReportHandler {
    pub fn new(athletes: Arc<dyn AthleteDirectory>, reports: Arc<dyn TalentReportService>) -> Self {
        Self { athletes, reports }
    }

    pub async fn handle(&self, query: LoadTalentReportQuery) -> TalentReportView {
        let id = query.athlete_id;
        let (profile, report) = futures::join!(
            self.athletes.find_athlete(&id),
            self.reports.latest_report(&id)
        );

        let mut view = TalentReportView::default();

        match profile {
            Ok(profile) => view.profile = profile,
            Err(e) => {
                tracing::error!(athlete_id = %id, error = %e, "failed to load athlete profile");
                view.notices.push(Notice::error("Failed to load athlete profile"));
            }
        }

        match report {
            Ok(report) => view.report = report,
            Err(e) => {
                tracing::error!(athlete_id = %id, error = %e, "failed to load talent report");
                view.notices.push(Notice::error("Failed to load talent report"));
            }
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAthleteDirectory, MockTalentReportService};
    use crate::domain::foundation::{ReportId, Timestamp};
    use crate::ports::GatewayError;

    fn report_for(athlete_id: AthleteId) -> TalentReport {
        TalentReport {
            id: ReportId::new(),
            athlete_id,
            report_text: "Excellent balance.".into(),
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn loads_profile_and_report() {
        let id = AthleteId::new();
        let handler = LoadTalentReportHandler::new(
            Arc::new(InMemoryAthleteDirectory::new().with_athlete(AthleteProfile::new(id, "Noah"))),
            Arc::new(MockTalentReportService::new().with_latest(report_for(id))),
        );

        let view = handler.handle(LoadTalentReportQuery { athlete_id: id }).await;

        assert!(view.can_share());
        assert!(view.notices.is_empty());
    }

    #[tokio::test]
    async fn no_report_yet_is_not_an_error() {
        let id = AthleteId::new();
        let handler = LoadTalentReportHandler::new(
            Arc::new(InMemoryAthleteDirectory::new().with_athlete(AthleteProfile::new(id, "Noah"))),
            Arc::new(MockTalentReportService::new()),
        );

        let view = handler.handle(LoadTalentReportQuery { athlete_id: id }).await;

        assert!(view.profile.is_some());
        assert!(view.report.is_none());
        assert!(view.notices.is_empty());
        assert!(!view.can_share());
    }

    #[tokio::test]
    async fn report_failure_keeps_profile() {
        let id = AthleteId::new();
        let handler = LoadTalentReportHandler::new(
            Arc::new(InMemoryAthleteDirectory::new().with_athlete(AthleteProfile::new(id, "Noah"))),
            Arc::new(MockTalentReportService::new().with_latest_error(GatewayError::gateway(502))),
        );

        let view = handler.handle(LoadTalentReportQuery { athlete_id: id }).await;

        assert!(view.profile.is_some());
        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].message, "Failed to load talent report");
    }

    #[tokio::test]
    async fn both_failures_produce_two_notices() {
        let id = AthleteId::new();
        let handler = LoadTalentReportHandler::new(
            Arc::new(InMemoryAthleteDirectory::new().with_failure(GatewayError::network("down"))),
            Arc::new(
                MockTalentReportService::new().with_latest_error(GatewayError::network("down")),
            ),
        );

        let view = handler.handle(LoadTalentReportQuery { athlete_id: id }).await;

        let messages: Vec<&str> = view.notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Failed to load athlete profile", "Failed to load talent report"]
        );
    }
}
