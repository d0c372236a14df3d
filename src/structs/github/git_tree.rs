use serde::Deserialize;

/// Response of `GET git/trees/{sha}`; only the tree id is used.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GitTree {
    pub sha: String,
    #[serde(default)]
    pub tree: Vec<serde_json::Value>,
}
