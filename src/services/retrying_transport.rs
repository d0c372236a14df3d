use std::sync::Arc;
use std::time::Duration;
use chrono::DateTime;
use crate::errors::{RemediatorError, RemediatorResult};
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::config::transport_config::TransportConfig;
use crate::structs::deadline::Deadline;
use crate::structs::http::http_error::HttpError;
use crate::structs::http::http_request::HttpRequest;
use crate::structs::http::http_response::HttpResponse;
use crate::traits::clock::Clock;
use crate::traits::http_transport::HttpTransport;

/// Exponential backoff for network failures and 5xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries: max_retries.max(1),
            base_delay,
        }
    }

    /// Delay after the `attempt`-th failure (1-based): `base * 2^attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// One logical HTTP call: rate-limited, timed out, retried.
#[derive(Clone)]
pub struct RetryingTransport {
    transport: Arc<dyn HttpTransport>,
    limiter: ApiRateLimiter,
    clock: Arc<dyn Clock>,
    policy: RetryPolicy,
    timeout: Duration,
    deadline: Option<Deadline>,
}

enum Outcome {
    Success(HttpResponse),
    Absent,
    RateLimited(Duration),
    Retryable(String),
    Fatal(RemediatorError),
}

impl RetryingTransport {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        limiter: ApiRateLimiter,
        clock: Arc<dyn Clock>,
        policy: RetryPolicy,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            limiter,
            clock,
            policy,
            timeout,
            deadline: None,
        }
    }

    pub fn from_config(
        transport: Arc<dyn HttpTransport>,
        limiter: ApiRateLimiter,
        clock: Arc<dyn Clock>,
        config: &TransportConfig,
    ) -> Self {
        let policy = RetryPolicy::new(config.max_retries, config.base_delay());
        Self::new(transport, limiter, clock, policy, config.timeout())
    }

    /// Copy of this transport whose waits may not outlast `deadline`.
    pub fn with_deadline(&self, deadline: Deadline) -> Self {
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    pub async fn execute(&self, request: HttpRequest) -> RemediatorResult<HttpResponse> {
        let url = request.url.clone();
        self.run(request, false, self.policy.max_retries)
            .await?
            .ok_or_else(|| RemediatorError::not_found(&url))
    }

    /// Single delivery attempt for non-idempotent writes.
    ///
    /// Rate-limit rejections are still waited out, since the server did not
    /// apply the request. A network failure or 5xx is not retried.
    pub async fn execute_once(&self, request: HttpRequest) -> RemediatorResult<HttpResponse> {
        let url = request.url.clone();
        self.run(request, false, 1)
            .await?
            .ok_or_else(|| RemediatorError::not_found(&url))
    }

    /// Like `execute`, but a 404 is an answer rather than an error.
    pub async fn probe(&self, request: HttpRequest) -> RemediatorResult<Option<HttpResponse>> {
        self.run(request, true, self.policy.max_retries).await
    }

    async fn run(
        &self,
        request: HttpRequest,
        allow_absent: bool,
        max_attempts: u32,
    ) -> RemediatorResult<Option<HttpResponse>> {
        let operation = format!("{} {}", request.method.as_str(), request.url);
        let mut attempts = 0u32;

        loop {
            match &self.deadline {
                Some(deadline) => {
                    self.limiter.admit_until(deadline, &operation).await?;
                    deadline.check(&operation)?;
                }
                None => self.limiter.admit().await,
            }

            let reason = match self.send_once(&request, allow_absent).await {
                Outcome::Success(response) => return Ok(Some(response)),
                Outcome::Absent => return Ok(None),
                Outcome::Fatal(error) => return Err(error),
                Outcome::RateLimited(wait) => {
                    log::warn!("Rate limited on {}. Waiting {:?}", operation, wait);
                    self.pause(wait, &operation).await?;
                    continue;
                }
                Outcome::Retryable(reason) => reason,
            };

            attempts += 1;
            if attempts >= max_attempts {
                log::warn!("{} failed after {} attempts: {}", operation, attempts, reason);
                return Err(RemediatorError::transient_error(&operation, attempts, &reason));
            }

            let delay = self.policy.delay_for(attempts);
            log::warn!(
                "{} failed (attempt {}/{}): {}. Retrying in {:?}",
                operation,
                attempts,
                max_attempts,
                reason,
                delay
            );
            self.pause(delay, &operation).await?;
        }
    }

    async fn send_once(&self, request: &HttpRequest, allow_absent: bool) -> Outcome {
        let sent = tokio::time::timeout(self.timeout, self.transport.send(request.clone())).await;

        let response = match sent {
            Err(_) => return Outcome::Retryable(HttpError::Timeout(self.timeout.as_secs()).to_string()),
            Ok(Err(error)) => return Outcome::Retryable(error.to_string()),
            Ok(Ok(response)) => response,
        };

        if response.is_success() {
            return Outcome::Success(response);
        }

        if let Some(wait) = self.rate_limit_wait(&response) {
            return Outcome::RateLimited(wait);
        }

        if Self::quota_exhausted(&response) {
            return Outcome::Retryable(format!("HTTP {}: rate limit exhausted, no reset time given", response.status));
        }

        if response.is_server_error() || response.status == 429 {
            return Outcome::Retryable(format!("HTTP {}", response.status));
        }

        if response.status == 404 && allow_absent {
            return Outcome::Absent;
        }

        Outcome::Fatal(Self::semantic_error(request, &response))
    }

    /// Server-indicated wait for 403/429 responses carrying rate-limit headers.
    ///
    /// `Retry-After` wins; otherwise an exhausted `x-ratelimit-remaining`
    /// waits until `x-ratelimit-reset`.
    fn rate_limit_wait(&self, response: &HttpResponse) -> Option<Duration> {
        if response.status != 403 && response.status != 429 {
            return None;
        }

        if let Some(retry_after) = response.header("retry-after") {
            let retry_after = retry_after.trim();
            if let Ok(secs) = retry_after.parse::<u64>() {
                return Some(Duration::from_secs(secs));
            }
            if let Ok(at) = DateTime::parse_from_rfc2822(retry_after) {
                let secs = (at.timestamp() - self.clock.utc_now().timestamp()).max(0);
                return Some(Duration::from_secs(secs as u64));
            }
        }

        let remaining = response.header("x-ratelimit-remaining")?.trim().parse::<u64>().ok()?;
        if remaining > 0 {
            return None;
        }

        let reset = response.header("x-ratelimit-reset")?.trim().parse::<i64>().ok()?;
        let secs = (reset - self.clock.utc_now().timestamp()).max(0);
        Some(Duration::from_secs(secs as u64))
    }

    /// 403/429 reporting zero remaining quota. Without a usable reset time
    /// this still is a rate-limit signal, retried with backoff.
    fn quota_exhausted(response: &HttpResponse) -> bool {
        (response.status == 403 || response.status == 429)
            && response
                .header("x-ratelimit-remaining")
                .and_then(|remaining| remaining.trim().parse::<u64>().ok())
                == Some(0)
    }

    fn semantic_error(request: &HttpRequest, response: &HttpResponse) -> RemediatorError {
        match response.status {
            401 => RemediatorError::auth_error("credentials were rejected (401)"),
            403 => RemediatorError::auth_error(&format!("access to {} is forbidden (403)", request.url)),
            404 => RemediatorError::not_found(&request.url),
            status => RemediatorError::http_error(status, &request.url, &response.text()),
        }
    }

    async fn pause(&self, duration: Duration, operation: &str) -> RemediatorResult<()> {
        if let Some(deadline) = &self.deadline {
            if duration > deadline.remaining() {
                log::warn!("Waiting {:?} for {} would outlast the operation deadline", duration, operation);
                return Err(RemediatorError::deadline_exceeded(operation));
            }
        }
        self.clock.sleep(duration).await;
        Ok(())
    }
}
