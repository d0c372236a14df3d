use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GitHubConfig {
    #[serde(default = "ConfigHelper::default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "ConfigHelper::default_allowed_hosts")]
    pub allowed_hosts: Vec<String>,

    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: ConfigHelper::default_api_base_url(),
            allowed_hosts: ConfigHelper::default_allowed_hosts(),
            token_env: ConfigHelper::default_token_env(),
            user_agent: ConfigHelper::default_user_agent(),
        }
    }
}
