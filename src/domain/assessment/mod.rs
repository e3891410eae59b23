//! Assessment module - the movement-skill assessment wizard.
//!
//! # Components
//!
//! - `catalog` - the 18 fixed movement skills and their categories
//! - `grading` - Skill Grading Store (one grade per skill, review cursor)
//! - `checklist`, `countdown`, `questionnaire` - per-step state
//! - `step` - the five wizard steps and their transition rules
//! - `session` - the aggregate that sequences the steps

mod catalog;
mod checklist;
mod countdown;
mod errors;
mod grade;
mod grading;
mod questionnaire;
mod session;
mod step;

pub use catalog::{
    MovementSkill, SkillCatalog, SkillCategory, SkillId, MOVEMENT_SKILLS, SKILL_COUNT,
};
pub use checklist::{ChecklistItem, PreTestChecklist};
pub use countdown::{Countdown, TimerKind, COOLDOWN_SECS, WARMUP_SECS};
pub use errors::AssessmentError;
pub use grade::Grade;
pub use grading::{GradeCounts, SkillGrade, SkillGradingStore};
pub use questionnaire::{
    question, Answer, Question, QuestionId, QuestionKind, QuestionnaireAnswers, CONFIDENCE,
    MOTIVATION, QUESTIONS, REQUIRED_ANSWERS, SPORT_INTERESTS,
};
pub use session::{
    ActionOutcome, AssessmentAction, AssessmentSession, AssessmentSubmission, StepTransition,
};
pub use step::AssessmentStep;
