use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OperationConfig {
    /// Upper bound for one full fetch-remediate-publish run.
    #[serde(default = "ConfigHelper::default_deadline_secs")]
    pub deadline_secs: u64,

    #[serde(default = "ConfigHelper::default_commit_message")]
    pub commit_message: String,
}

impl OperationConfig {
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            deadline_secs: ConfigHelper::default_deadline_secs(),
            commit_message: ConfigHelper::default_commit_message(),
        }
    }
}
