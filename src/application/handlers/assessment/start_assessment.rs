//! StartAssessmentHandler - opens a session and loads the athlete header.

use std::sync::Arc;

use crate::application::Notice;
use crate::config::AssessmentConfig;
use crate::domain::assessment::{AssessmentSession, COOLDOWN_SECS, WARMUP_SECS};
use crate::domain::foundation::AthleteId;
use crate::ports::{AthleteDirectory, AthleteProfile, HapticFeedback};

use super::controller::AssessmentController;

/// Command to start assessing an athlete.
#[derive(Debug, Clone)]
pub struct StartAssessmentCommand {
    pub athlete_id: AthleteId,
}

/// Outcome of the profile lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileState {
    Loaded(AthleteProfile),
    NotFound,
    /// The lookup failed; grading can still proceed offline.
    Unavailable(Notice),
}

impl ProfileState {
    pub fn profile(&self) -> Option<&AthleteProfile> {
        match self {
            ProfileState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }
}

/// A ready-to-run session plus whatever profile could be loaded.
pub struct StartAssessmentResult {
    pub controller: AssessmentController,
    pub profile: ProfileState,
}

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    athletes: Arc<dyn AthleteDirectory>,
    haptics: Arc<dyn HapticFeedback>,
    warmup_secs: u32,
    cooldown_secs: u32,
}

impl StartAssessmentHandler {
    pub fn new(athletes: Arc<dyn AthleteDirectory>, haptics: Arc<dyn HapticFeedback>) -> Self {
        Self {
            athletes,
            haptics,
            warmup_secs: WARMUP_SECS,
            cooldown_secs: COOLDOWN_SECS,
        }
    }

    /// Uses the configured timer lengths.
    pub fn with_config(mut self, config: &AssessmentConfig) -> Self {
        self.warmup_secs = config.warmup_secs;
        self.cooldown_secs = config.cooldown_secs;
        self
    }

    /// Always returns a session; profile failures only degrade the header.
    pub async fn handle(&self, cmd: StartAssessmentCommand) -> StartAssessmentResult {
        let session =
            AssessmentSession::with_durations(cmd.athlete_id, self.warmup_secs, self.cooldown_secs);
        tracing::info!(
            assessment_id = %session.id(),
            athlete_id = %cmd.athlete_id,
            "assessment started"
        );

        let profile = match self.athletes.find_athlete(&cmd.athlete_id).await {
            Ok(Some(profile)) => ProfileState::Loaded(profile),
            Ok(None) => {
                tracing::warn!(
                    athlete_id = %cmd.athlete_id,
                    "athlete not found, continuing without profile"
                );
                ProfileState::NotFound
            }
            Err(e) => {
                tracing::warn!(
                    athlete_id = %cmd.athlete_id,
                    error = %e,
                    "athlete lookup failed, continuing without profile"
                );
                let notice = Notice::error("Failed to load athlete profile");
                let notice = if e.is_retryable() {
                    notice.retryable()
                } else {
                    notice
                };
                ProfileState::Unavailable(notice)
            }
        };

        StartAssessmentResult {
            controller: AssessmentController::new(session, self.haptics.clone()),
            profile,
        }
    }
}
