use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateLimitConfig {
    #[serde(default = "ConfigHelper::default_rate_limit_calls")]
    pub calls: usize,

    #[serde(default = "ConfigHelper::default_rate_limit_period_secs")]
    pub period_secs: u64,
}

impl RateLimitConfig {
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.period_secs)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            calls: ConfigHelper::default_rate_limit_calls(),
            period_secs: ConfigHelper::default_rate_limit_period_secs(),
        }
    }
}
