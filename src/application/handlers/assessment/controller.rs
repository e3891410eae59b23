//! AssessmentController - single owner of a running assessment session.
//!
//! The hosting screen renders from [`AssessmentView`] and reports user input
//! as [`AssessmentAction`]s through [`AssessmentController::dispatch`]. Haptic
//! feedback is fired here so the session itself stays free of side effects.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::analysis::AssessmentSummary;
use crate::domain::assessment::{
    ActionOutcome, AssessmentAction, AssessmentSession, AssessmentStep, AssessmentSubmission,
    Countdown, Grade, MovementSkill, PreTestChecklist, StepTransition, REQUIRED_ANSWERS,
    SKILL_COUNT,
};
use crate::domain::foundation::{AssessmentId, AthleteId, DomainError};
use crate::ports::{HapticFeedback, HapticStyle};

/// Read-only snapshot of everything a step screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentView {
    pub assessment_id: AssessmentId,
    pub athlete_id: AthleteId,
    pub step: AssessmentStep,
    pub step_index: usize,
    pub step_titles: Vec<&'static str>,
    pub progress_percent: u8,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub is_completed: bool,
    pub checklist: PreTestChecklist,
    pub warmup: Countdown,
    pub cooldown: Countdown,
    pub current_skill: MovementSkill,
    pub current_skill_index: usize,
    pub current_grade: Option<Grade>,
    pub graded_count: usize,
    pub skill_count: usize,
    pub answered_count: usize,
    pub required_answers: usize,
}

/// Owns an [`AssessmentSession`] and its device side effects.
pub struct AssessmentController {
    session: AssessmentSession,
    haptics: Arc<dyn HapticFeedback>,
}

impl AssessmentController {
    pub fn new(session: AssessmentSession, haptics: Arc<dyn HapticFeedback>) -> Self {
        Self { session, haptics }
    }

    /// Applies an action and fires the matching haptic.
    ///
    /// Medium impact on every successful advance (including completion), light
    /// impact on every grade. Blocked navigation and errors are silent.
    pub fn dispatch(&mut self, action: AssessmentAction) -> Result<ActionOutcome, DomainError> {
        let is_grading = matches!(action, AssessmentAction::GradeCurrentSkill(_));

        let outcome = self.session.apply(action).map_err(|e| {
            let err = DomainError::from(e);
            tracing::debug!(
                assessment_id = %self.session.id(),
                code = %err.code,
                error = %err.message,
                "action rejected"
            );
            err
        })?;

        match outcome {
            ActionOutcome::Step(StepTransition::Advanced { from, to }) => {
                tracing::debug!(assessment_id = %self.session.id(), %from, %to, "step advanced");
                self.haptics.impact(HapticStyle::Medium);
            }
            ActionOutcome::Step(StepTransition::Completed) => {
                tracing::info!(
                    assessment_id = %self.session.id(),
                    athlete_id = %self.session.athlete_id(),
                    "assessment completed"
                );
                self.haptics.impact(HapticStyle::Medium);
            }
            ActionOutcome::Applied if is_grading => self.haptics.impact(HapticStyle::Light),
            _ => {}
        }

        Ok(outcome)
    }

    pub fn view(&self) -> AssessmentView {
        let s = &self.session;
        let grading = s.grading();
        AssessmentView {
            assessment_id: s.id(),
            athlete_id: s.athlete_id(),
            step: s.current_step(),
            step_index: s.current_step().index(),
            step_titles: AssessmentStep::all().iter().map(|step| step.title()).collect(),
            progress_percent: s.current_step().progress_percent(),
            can_advance: s.can_advance(),
            can_retreat: s.can_retreat(),
            is_completed: s.is_completed(),
            checklist: *s.checklist(),
            warmup: *s.warmup(),
            cooldown: *s.cooldown(),
            current_skill: *grading.current_skill(),
            current_skill_index: grading.cursor(),
            current_grade: grading.grade_for_current(),
            graded_count: grading.graded_count(),
            skill_count: SKILL_COUNT,
            answered_count: s.answers().answered_count(),
            required_answers: REQUIRED_ANSWERS,
        }
    }

    pub fn summary(&self) -> AssessmentSummary {
        self.session.summary()
    }

    pub fn submission(&self) -> Result<AssessmentSubmission, DomainError> {
        Ok(self.session.submission()?)
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn into_session(self) -> AssessmentSession {
        self.session
    }
}
