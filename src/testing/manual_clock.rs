//! Simulated clock for deterministic timing tests.

use std::sync::Mutex;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::traits::clock::Clock;

/// Wall-clock origin of every [`ManualClock`]: 2023-11-14T22:13:20Z.
pub const MANUAL_CLOCK_EPOCH_SECS: i64 = 1_700_000_000;

/// A clock that only moves when told to.
///
/// `sleep` returns immediately after advancing simulated time by the requested
/// duration and recording it, so backoff schedules can be asserted exactly.
pub struct ManualClock {
    base: Instant,
    base_utc: DateTime<Utc>,
    state: Mutex<ManualClockState>,
}

#[derive(Default)]
struct ManualClockState {
    offset: Duration,
    sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            base_utc: DateTime::from_timestamp(MANUAL_CLOCK_EPOCH_SECS, 0).unwrap_or_else(Utc::now),
            state: Mutex::new(ManualClockState::default()),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.offset += duration;
    }

    pub fn elapsed(&self) -> Duration {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).offset
    }

    /// Every duration passed to `sleep`, in call order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).sleeps.clone()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        let offset = chrono::Duration::from_std(self.elapsed()).unwrap_or_else(|_| chrono::Duration::zero());
        self.base_utc + offset
    }

    async fn sleep(&self, duration: Duration) {
        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.sleeps.push(duration);
            state.offset += duration;
        }
        tokio::task::yield_now().await;
    }
}
