//! Errors returned by backend-facing ports.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Failure talking to the coaching backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// An upstream gateway failed (HTTP 502 or 504).
    #[error("upstream gateway error (status {status})")]
    Gateway {
        /// HTTP status code.
        status: u16,
    },

    /// The access token was rejected.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Connection-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Any other non-success response.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error detail from the response body.
        message: String,
    },
}

impl GatewayError {
    /// Creates a timeout error.
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Creates a gateway error.
    pub fn gateway(status: u16) -> Self {
        Self::Gateway { status }
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a generic API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// True for timeouts and 502/504 gateway failures.
    pub fn is_timeout_or_gateway(&self) -> bool {
        matches!(self, GatewayError::Timeout { .. } | GatewayError::Gateway { .. })
    }

    /// Returns true if repeating the request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Timeout { .. }
            | GatewayError::Gateway { .. }
            | GatewayError::Network(_) => true,
            GatewayError::Api { status, .. } => *status >= 500,
            GatewayError::Unauthorized(_) | GatewayError::NotFound(_) | GatewayError::Parse(_) => {
                false
            }
        }
    }

    /// Maps onto the crate-wide error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GatewayError::Timeout { .. } | GatewayError::Gateway { .. } => {
                ErrorCode::GatewayTimeout
            }
            GatewayError::Unauthorized(_) => ErrorCode::Unauthorized,
            GatewayError::NotFound(_) => ErrorCode::NotFound,
            GatewayError::Network(_) => ErrorCode::NetworkError,
            GatewayError::Parse(_) | GatewayError::Api { .. } => ErrorCode::InternalError,
        }
    }
}

impl From<GatewayError> for DomainError {
    fn from(err: GatewayError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
