use serde::{Deserialize, Serialize};

pub const REGULAR_FILE_MODE: &str = "100644";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TreeItem {
    pub path: String,
    pub mode: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub sha: String,
}

impl TreeItem {
    pub fn blob(path: &str, sha: &str) -> Self {
        Self {
            path: path.to_string(),
            mode: REGULAR_FILE_MODE.to_string(),
            item_type: "blob".to_string(),
            sha: sha.to_string(),
        }
    }
}
