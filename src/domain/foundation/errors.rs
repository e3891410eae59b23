//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    OutOfRange,
    InvalidFormat,

    // Not found errors
    NotFound,
    SkillNotFound,
    QuestionNotFound,

    // State errors
    AssessmentCompleted,
    AssessmentIncomplete,

    // Authorization errors
    Unauthorized,

    // Backend errors
    GatewayTimeout,
    NetworkError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::SkillNotFound => "SKILL_NOT_FOUND",
            ErrorCode::QuestionNotFound => "QUESTION_NOT_FOUND",
            ErrorCode::AssessmentCompleted => "ASSESSMENT_COMPLETED",
            ErrorCode::AssessmentIncomplete => "ASSESSMENT_INCOMPLETE",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::GatewayTimeout => "GATEWAY_TIMEOUT",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Error returned across the application boundary: a stable code plus a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("confidence", 1, 10, 12);
        assert_eq!(
            format!("{}", err),
            "Field 'confidence' must be between 1 and 10, got 12"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("motivation", "unknown option 'Money'");
        assert_eq!(
            format!("{}", err),
            "Field 'motivation' has invalid format: unknown option 'Money'"
        );
    }

    #[test]
    fn validation_error_codes() {
        assert_eq!(
            ValidationError::out_of_range("confidence", 1, 10, 0).code(),
            ErrorCode::OutOfRange
        );
        assert_eq!(
            ValidationError::invalid_format("option", "unknown").code(),
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::NotFound, "not found: athlete");
        assert_eq!(format!("{}", err), "[NOT_FOUND] not found: athlete");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::GatewayTimeout), "GATEWAY_TIMEOUT");
        assert_eq!(format!("{}", ErrorCode::AssessmentIncomplete), "ASSESSMENT_INCOMPLETE");
    }
}
