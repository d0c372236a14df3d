use serde::{Deserialize, Serialize};
use crate::enums::remediation_provider::RemediationProvider;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RemediationConfig {
    #[serde(default)]
    pub provider: RemediationProvider,

    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "ConfigHelper::default_remediation_api_key_env")]
    pub api_key_env: String,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            provider: RemediationProvider::default(),
            base_url: None,
            api_key_env: ConfigHelper::default_remediation_api_key_env(),
        }
    }
}
