use std::time::{Duration, Instant};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Time source and sleeper shared by the rate limiter and the retry loop.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    /// Wall-clock time, needed to interpret rate-limit reset timestamps.
    fn utc_now(&self) -> DateTime<Utc>;

    async fn sleep(&self, duration: Duration);
}
