//! AssessmentSession aggregate - one end-to-end run of the wizard.
//!
//! The session owns every piece of wizard state (checklist, timers, grades,
//! answers, current step). Hosts mutate it only through [`AssessmentAction`]s
//! and read it through accessors, so step validity is decided in one place.

use serde::Serialize;

use crate::domain::analysis::AssessmentSummary;
use crate::domain::foundation::{AssessmentId, AthleteId, StateMachine, Timestamp};

use super::catalog::SkillId;
use super::checklist::{ChecklistItem, PreTestChecklist};
use super::countdown::{Countdown, TimerKind, COOLDOWN_SECS, WARMUP_SECS};
use super::errors::AssessmentError;
use super::grade::Grade;
use super::grading::{SkillGrade, SkillGradingStore};
use super::questionnaire::{QuestionId, QuestionnaireAnswers};
use super::step::AssessmentStep;

/// A transition request dispatched by the hosting screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentAction {
    ToggleChecklist(ChecklistItem),
    StartWarmup,
    Tick(TimerKind),
    GradeCurrentSkill(Grade),
    SetSkillNotes { skill_id: SkillId, notes: String },
    NextSkill,
    PreviousSkill,
    AnswerScale { question: QuestionId, value: u8 },
    ChooseOption { question: QuestionId, option: String },
    ToggleOption { question: QuestionId, option: String },
    Advance,
    Retreat,
}

/// Result of a step navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepTransition {
    Advanced {
        from: AssessmentStep,
        to: AssessmentStep,
    },
    Retreated {
        from: AssessmentStep,
        to: AssessmentStep,
    },
    /// The request was not permitted; the step is unchanged.
    Blocked { step: AssessmentStep },
    /// "Complete" from the summary step; the wizard is finished.
    Completed,
}

impl StepTransition {
    /// True for transitions that changed the step or finished the wizard.
    pub fn is_successful(&self) -> bool {
        !matches!(self, StepTransition::Blocked { .. })
    }
}

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Session state changed.
    Applied,
    /// The action was valid but had no effect (cursor at a bound, idle timer).
    Unchanged,
    /// A navigation action was processed.
    Step(StepTransition),
}

/// Payload sent to the backend once the wizard is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSubmission {
    pub assessment_id: AssessmentId,
    pub athlete_id: AthleteId,
    pub skill_grades: Vec<SkillGrade>,
    pub answers: QuestionnaireAnswers,
    pub completed_at: Timestamp,
}

/// The assessment aggregate.
///
/// # Invariants
///
/// - `step` only moves between adjacent steps
/// - forward moves require `is_step_valid(step)`
/// - once `completed_at` is set every action is rejected
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: AssessmentId,
    athlete_id: AthleteId,
    started_at: Timestamp,
    step: AssessmentStep,
    checklist: PreTestChecklist,
    warmup: Countdown,
    grading: SkillGradingStore,
    answers: QuestionnaireAnswers,
    cooldown: Countdown,
    completed_at: Option<Timestamp>,
}

impl AssessmentSession {
    /// Starts a new session with the default 15 minute warmup and 10 minute cooldown.
    pub fn new(athlete_id: AthleteId) -> Self {
        Self::with_durations(athlete_id, WARMUP_SECS, COOLDOWN_SECS)
    }

    /// Starts a new session with custom timer lengths.
    pub fn with_durations(athlete_id: AthleteId, warmup_secs: u32, cooldown_secs: u32) -> Self {
        Self {
            id: AssessmentId::new(),
            athlete_id,
            started_at: Timestamp::now(),
            step: AssessmentStep::PreTest,
            checklist: PreTestChecklist::default(),
            warmup: Countdown::new(warmup_secs),
            grading: SkillGradingStore::new(),
            answers: QuestionnaireAnswers::new(),
            cooldown: Countdown::new(cooldown_secs),
            completed_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn athlete_id(&self) -> AthleteId {
        self.athlete_id
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn current_step(&self) -> AssessmentStep {
        self.step
    }

    pub fn checklist(&self) -> &PreTestChecklist {
        &self.checklist
    }

    pub fn warmup(&self) -> &Countdown {
        &self.warmup
    }

    pub fn cooldown(&self) -> &Countdown {
        &self.cooldown
    }

    pub fn grading(&self) -> &SkillGradingStore {
        &self.grading
    }

    pub fn answers(&self) -> &QuestionnaireAnswers {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Step sequencing
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the given step's exit requirements are met.
    pub fn is_step_valid(&self, step: AssessmentStep) -> bool {
        match step {
            AssessmentStep::PreTest => self.checklist.is_complete(),
            // A warmup that was never started does not block.
            AssessmentStep::Warmup => self.warmup.is_finished() || !self.warmup.is_started(),
            AssessmentStep::Skills => self.grading.is_complete(),
            AssessmentStep::Questionnaire => self.answers.is_complete(),
            AssessmentStep::Summary => true,
        }
    }

    /// Whether "continue" (or "complete" on the summary) is enabled.
    pub fn can_advance(&self) -> bool {
        !self.is_completed() && self.is_step_valid(self.step)
    }

    /// Whether "back" is enabled.
    pub fn can_retreat(&self) -> bool {
        !self.is_completed() && !self.step.is_first()
    }

    /// Moves forward one step, or completes the wizard from the summary.
    ///
    /// Returns `Blocked` without changing state when the current step is not valid.
    pub fn advance(&mut self) -> StepTransition {
        if !self.can_advance() {
            return StepTransition::Blocked { step: self.step };
        }
        match self.step.next() {
            Some(to) => {
                let Some(from) = self.move_to(to) else {
                    return StepTransition::Blocked { step: self.step };
                };
                if to == AssessmentStep::Summary {
                    self.cooldown.start();
                }
                StepTransition::Advanced { from, to }
            }
            None => {
                self.completed_at = Some(Timestamp::now());
                StepTransition::Completed
            }
        }
    }

    /// Moves back one step. Never validated; blocked only on the first step.
    pub fn retreat(&mut self) -> StepTransition {
        if !self.can_retreat() {
            return StepTransition::Blocked { step: self.step };
        }
        match self.step.previous().and_then(|to| self.move_to(to).map(|from| (from, to))) {
            Some((from, to)) => StepTransition::Retreated { from, to },
            None => StepTransition::Blocked { step: self.step },
        }
    }

    /// Switches to an adjacent step, returning the step left behind.
    fn move_to(&mut self, to: AssessmentStep) -> Option<AssessmentStep> {
        let from = self.step;
        match from.transition_to(to) {
            Ok(step) => {
                self.step = step;
                Some(from)
            }
            Err(e) => {
                tracing::warn!(
                    assessment_id = %self.id,
                    %from,
                    %to,
                    error = %e,
                    "step transition refused"
                );
                None
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a transition request.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` once the wizard has been completed
    /// - questionnaire validation errors for malformed answers
    /// - `SkillNotGraded` when attaching notes to an ungraded skill
    pub fn apply(&mut self, action: AssessmentAction) -> Result<ActionOutcome, AssessmentError> {
        if self.is_completed() {
            return Err(AssessmentError::AlreadyCompleted(self.id));
        }

        let outcome = match action {
            AssessmentAction::ToggleChecklist(item) => {
                self.checklist.toggle(item);
                ActionOutcome::Applied
            }
            AssessmentAction::StartWarmup => changed(self.warmup.start()),
            AssessmentAction::Tick(TimerKind::Warmup) => changed(self.warmup.tick()),
            AssessmentAction::Tick(TimerKind::Cooldown) => changed(self.cooldown.tick()),
            AssessmentAction::GradeCurrentSkill(grade) => {
                self.grading.grade_current(grade);
                ActionOutcome::Applied
            }
            AssessmentAction::SetSkillNotes { skill_id, notes } => {
                if !self.grading.set_notes(skill_id, notes) {
                    return Err(AssessmentError::SkillNotGraded(skill_id));
                }
                ActionOutcome::Applied
            }
            AssessmentAction::NextSkill => changed(self.grading.move_next()),
            AssessmentAction::PreviousSkill => changed(self.grading.move_previous()),
            AssessmentAction::AnswerScale { question, value } => {
                self.answers.answer_scale(question, value)?;
                ActionOutcome::Applied
            }
            AssessmentAction::ChooseOption { question, option } => {
                self.answers.choose(question, &option)?;
                ActionOutcome::Applied
            }
            AssessmentAction::ToggleOption { question, option } => {
                self.answers.toggle_option(question, &option)?;
                ActionOutcome::Applied
            }
            AssessmentAction::Advance => ActionOutcome::Step(self.advance()),
            AssessmentAction::Retreat => ActionOutcome::Step(self.retreat()),
        };
        Ok(outcome)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived output
    // ─────────────────────────────────────────────────────────────────────────

    /// Category scores, strongest areas and sport recommendations for the current grades.
    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary::from_grades(&self.grading)
    }

    /// Builds the report submission for a completed session.
    pub fn submission(&self) -> Result<AssessmentSubmission, AssessmentError> {
        let completed_at = self
            .completed_at
            .ok_or(AssessmentError::NotCompleted(self.id))?;
        Ok(AssessmentSubmission {
            assessment_id: self.id,
            athlete_id: self.athlete_id,
            skill_grades: self.grading.grades().to_vec(),
            answers: self.answers.clone(),
            completed_at,
        })
    }
}

fn changed(did_change: bool) -> ActionOutcome {
    if did_change {
        ActionOutcome::Applied
    } else {
        ActionOutcome::Unchanged
    }
}
