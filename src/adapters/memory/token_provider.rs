//! Fixed-token AccessTokenProvider.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use crate::ports::AccessTokenProvider;

/// Serves one token until invalidated.
#[derive(Debug, Default)]
pub struct StaticTokenProvider {
    token: Mutex<Option<String>>,
    invalidations: Mutex<u32>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
            invalidations: Mutex::new(0),
        }
    }

    /// A provider with no signed-in session.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// How many times the session was invalidated.
    pub fn invalidation_count(&self) -> u32 {
        *self
            .invalidations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn invalidate(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        *self
            .invalidations
            .lock()
            .unwrap_or_else(PoisonError::into_inner) += 1;
    }
}
