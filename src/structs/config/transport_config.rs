use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TransportConfig {
    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total attempts for network failures and 5xx responses.
    #[serde(default = "ConfigHelper::default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "ConfigHelper::default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl TransportConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: ConfigHelper::default_timeout_secs(),
            max_retries: ConfigHelper::default_max_retries(),
            base_delay_ms: ConfigHelper::default_base_delay_ms(),
        }
    }
}
