//! In-memory AthleteDirectory for tests and offline demos.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::foundation::AthleteId;
use crate::ports::{AthleteDirectory, AthleteProfile, GatewayError};

/// Profiles held in a map, with optional failure injection.
#[derive(Default)]
pub struct InMemoryAthleteDirectory {
    athletes: Mutex<HashMap<AthleteId, AthleteProfile>>,
    failure: Mutex<Option<GatewayError>>,
    lookups: Mutex<Vec<AthleteId>>,
}

impl InMemoryAthleteDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a profile.
    pub fn with_athlete(self, profile: AthleteProfile) -> Self {
        self.insert(profile);
        self
    }

    /// Makes every lookup fail with `error` until cleared.
    pub fn with_failure(self, error: GatewayError) -> Self {
        self.fail_with(Some(error));
        self
    }

    pub fn insert(&self, profile: AthleteProfile) {
        self.athletes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(profile.id, profile);
    }

    /// Sets or clears the injected failure.
    pub fn fail_with(&self, error: Option<GatewayError>) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = error;
    }

    /// Ids looked up so far, in call order.
    pub fn lookups(&self) -> Vec<AthleteId> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl AthleteDirectory for InMemoryAthleteDirectory {
    async fn find_athlete(&self, id: &AthleteId) -> Result<Option<AthleteProfile>, GatewayError> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*id);

        if let Some(error) = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        Ok(self
            .athletes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }
}
