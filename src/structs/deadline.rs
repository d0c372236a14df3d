use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::errors::{RemediatorError, RemediatorResult};
use crate::traits::clock::Clock;

/// Overall time budget for one operation, checked at call boundaries.
#[derive(Clone)]
pub struct Deadline {
    expires_at: Instant,
    clock: Arc<dyn Clock>,
}

impl Deadline {
    pub fn after(budget: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            expires_at: clock.now() + budget,
            clock,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(self.clock.now())
    }

    pub fn is_expired(&self) -> bool {
        self.clock.now() >= self.expires_at
    }

    pub fn check(&self, stage: &str) -> RemediatorResult<()> {
        if self.is_expired() {
            log::warn!("Deadline exceeded before {}", stage);
            return Err(RemediatorError::deadline_exceeded(stage));
        }
        Ok(())
    }
}
