use serde::{Deserialize, Serialize};
use crate::structs::config::fetch_config::FetchConfig;
use crate::structs::config::github_config::GitHubConfig;
use crate::structs::config::operation_config::OperationConfig;
use crate::structs::config::rate_limit_config::RateLimitConfig;
use crate::structs::config::remediation_config::RemediationConfig;
use crate::structs::config::transport_config::TransportConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    #[serde(default)]
    pub operation: OperationConfig,

    #[serde(default)]
    pub remediation: RemediationConfig,
}
