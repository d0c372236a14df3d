use serde::{Deserialize, Serialize};
use crate::errors::RemediatorResult;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FetchConfig {
    #[serde(default = "ConfigHelper::default_max_depth")]
    pub max_depth: usize,

    /// Human readable size such as "512KB" or "1MB".
    #[serde(default = "ConfigHelper::default_max_file_size")]
    pub max_file_size: String,

    #[serde(default)]
    pub exclude_folders: Vec<String>,
}

impl FetchConfig {
    pub fn max_file_size_bytes(&self) -> RemediatorResult<u64> {
        ConfigHelper::parse_size(&self.max_file_size)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_depth: ConfigHelper::default_max_depth(),
            max_file_size: ConfigHelper::default_max_file_size(),
            exclude_folders: Vec::new(),
        }
    }
}
