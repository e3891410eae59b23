//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, ValidationError};

use super::catalog::SkillId;
use super::questionnaire::QuestionId;

/// Errors raised by the assessment aggregate.
///
/// Blocked step navigation is not an error; see `StepTransition::Blocked`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Assessment {0} is already completed")]
    AlreadyCompleted(AssessmentId),

    #[error("Assessment {0} has not been completed")]
    NotCompleted(AssessmentId),

    #[error("Unknown question {0}")]
    UnknownQuestion(QuestionId),

    #[error("Question {question} expects a {expected} answer")]
    WrongAnswerKind {
        question: QuestionId,
        expected: &'static str,
    },

    #[error("Skill {0} has not been graded")]
    SkillNotGraded(SkillId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::AlreadyCompleted(_) => ErrorCode::AssessmentCompleted,
            AssessmentError::NotCompleted(_) => ErrorCode::AssessmentIncomplete,
            AssessmentError::UnknownQuestion(_) => ErrorCode::QuestionNotFound,
            AssessmentError::WrongAnswerKind { .. } => ErrorCode::ValidationFailed,
            AssessmentError::SkillNotGraded(_) => ErrorCode::SkillNotFound,
            AssessmentError::Validation(e) => e.code(),
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
