use serde::{Deserialize, Serialize};

/// Input of the single exposed operation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RemediationRequest {
    pub repository_url: String,
    pub branch_name: String,
    pub new_branch_name: String,
    #[serde(default)]
    pub exclude_folders: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_extensions: Option<Vec<String>>,
}

impl RemediationRequest {
    pub fn new(repository_url: &str, branch_name: &str, new_branch_name: &str) -> Self {
        Self {
            repository_url: repository_url.to_string(),
            branch_name: branch_name.to_string(),
            new_branch_name: new_branch_name.to_string(),
            exclude_folders: None,
            exclude_extensions: None,
        }
    }

    pub fn exclude_folders(&self) -> &[String] {
        self.exclude_folders.as_deref().unwrap_or_default()
    }

    /// Extensions normalized to lowercase without a leading dot.
    pub fn exclude_extensions(&self) -> Vec<String> {
        self.exclude_extensions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect()
    }
}
