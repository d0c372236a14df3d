use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use crate::errors::{RemediatorError, RemediatorResult};
use crate::structs::config::rate_limit_config::RateLimitConfig;
use crate::structs::deadline::Deadline;
use crate::traits::clock::Clock;

/// Sliding-window limiter: at most `calls` admissions in any trailing `period`.
///
/// Cloning shares the window, so one instance created at startup gates every
/// operation in the process.
#[derive(Clone)]
pub struct ApiRateLimiter {
    calls: usize,
    period: Duration,
    window: Arc<Mutex<VecDeque<Instant>>>,
    clock: Arc<dyn Clock>,
}

impl ApiRateLimiter {
    pub fn new(calls: usize, period: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            calls: calls.max(1),
            period,
            window: Arc::new(Mutex::new(VecDeque::with_capacity(calls.max(1)))),
            clock,
        }
    }

    pub fn from_config(config: &RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(config.calls, config.period(), clock)
    }

    /// Suspends until the call fits in the window, then records it.
    pub async fn admit(&self) {
        loop {
            let wait = match self.try_admit() {
                None => return,
                Some(wait) => wait,
            };

            log::debug!("Rate limiter full ({} calls per {:?}), waiting {:?}", self.calls, self.period, wait);
            self.clock.sleep(wait).await;
        }
    }

    /// Like `admit`, but fails instead of waiting past `deadline`.
    ///
    /// Nothing is recorded in the window when admission is refused.
    pub async fn admit_until(&self, deadline: &Deadline, stage: &str) -> RemediatorResult<()> {
        loop {
            deadline.check(stage)?;

            let wait = match self.try_admit() {
                None => return Ok(()),
                Some(wait) => wait,
            };

            if wait >= deadline.remaining() {
                log::warn!("Rate limiter wait of {:?} for {} would outlast the operation deadline", wait, stage);
                return Err(RemediatorError::deadline_exceeded(stage));
            }

            log::debug!("Rate limiter full ({} calls per {:?}), waiting {:?}", self.calls, self.period, wait);
            self.clock.sleep(wait).await;
        }
    }

    /// Check-and-record under one lock. Returns how long to wait when full.
    fn try_admit(&self) -> Option<Duration> {
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());
        let now = self.clock.now();
        Self::prune(&mut window, now, self.period);

        if window.len() < self.calls {
            window.push_back(now);
            return None;
        }

        window
            .front()
            .map(|oldest| self.period.saturating_sub(now.saturating_duration_since(*oldest)))
    }

    fn prune(window: &mut VecDeque<Instant>, now: Instant, period: Duration) {
        while let Some(oldest) = window.front() {
            if now.saturating_duration_since(*oldest) >= period {
                window.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn check_remaining(&self) -> usize {
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());
        Self::prune(&mut window, self.clock.now(), self.period);
        self.calls.saturating_sub(window.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::manual_clock::ManualClock;
    use proptest::prelude::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[tokio::test]
    async fn admits_up_to_limit_without_waiting() {
        let clock = Arc::new(ManualClock::new());
        let limiter = ApiRateLimiter::new(3, Duration::from_secs(10), clock.clone());

        for _ in 0..3 {
            limiter.admit().await;
        }

        assert!(clock.sleeps().is_empty());
        assert_eq!(limiter.check_remaining(), 0);
    }

    #[tokio::test]
    async fn waits_until_oldest_call_leaves_window() {
        let clock = Arc::new(ManualClock::new());
        let limiter = ApiRateLimiter::new(2, Duration::from_secs(10), clock.clone());

        limiter.admit().await;
        clock.advance(Duration::from_secs(4));
        limiter.admit().await;
        limiter.admit().await;

        assert_eq!(clock.sleeps(), vec![Duration::from_secs(6)]);
        assert_eq!(clock.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test]
    async fn clones_share_one_window() {
        let clock = Arc::new(ManualClock::new());
        let limiter = ApiRateLimiter::new(2, Duration::from_secs(5), clock.clone());
        let other = limiter.clone();

        limiter.admit().await;
        other.admit().await;

        assert_eq!(limiter.check_remaining(), 0);
        clock.advance(Duration::from_secs(5));
        assert_eq!(other.check_remaining(), 2);
    }

    #[tokio::test]
    async fn admission_that_would_outlast_deadline_is_refused() {
        let clock = Arc::new(ManualClock::new());
        let limiter = ApiRateLimiter::new(1, Duration::from_secs(10), clock.clone());
        let deadline = Deadline::after(Duration::from_secs(5), clock.clone());

        limiter.admit_until(&deadline, "first call").await.unwrap();
        let err = limiter.admit_until(&deadline, "create ref").await.unwrap_err();

        assert_eq!(err, RemediatorError::deadline_exceeded("create ref"));
        assert!(clock.sleeps().is_empty());
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn admission_waits_when_deadline_allows() {
        let clock = Arc::new(ManualClock::new());
        let limiter = ApiRateLimiter::new(1, Duration::from_secs(10), clock.clone());
        let deadline = Deadline::after(Duration::from_secs(30), clock.clone());

        limiter.admit_until(&deadline, "first call").await.unwrap();
        limiter.admit_until(&deadline, "second call").await.unwrap();

        assert_eq!(clock.sleeps(), vec![Duration::from_secs(10)]);
    }

    #[tokio::test]
    async fn expired_deadline_refuses_even_a_free_slot() {
        let clock = Arc::new(ManualClock::new());
        let limiter = ApiRateLimiter::new(5, Duration::from_secs(10), clock.clone());
        let deadline = Deadline::after(Duration::from_secs(1), clock.clone());

        clock.advance(Duration::from_secs(1));

        assert!(limiter.admit_until(&deadline, "listing").await.is_err());
        assert_eq!(limiter.check_remaining(), 5);
    }

    proptest! {
        #[test]
        fn never_admits_more_than_limit_in_any_window(
            calls in 1usize..5,
            period_secs in 1u64..20,
            gaps in proptest::collection::vec(0u64..8, 1..40),
        ) {
            let clock = Arc::new(ManualClock::new());
            let limiter = ApiRateLimiter::new(calls, Duration::from_secs(period_secs), clock.clone());
            let period = Duration::from_secs(period_secs);

            let admitted: Vec<Duration> = block_on(async {
                let mut times = Vec::new();
                for gap in &gaps {
                    clock.advance(Duration::from_secs(*gap));
                    limiter.admit().await;
                    times.push(clock.elapsed());
                }
                times
            });

            for (i, start) in admitted.iter().enumerate() {
                let in_window = admitted[i..].iter().filter(|t| **t < *start + period).count();
                prop_assert!(in_window <= calls, "{} calls within {:?} of {:?}", in_window, period, start);
            }
        }
    }
}
