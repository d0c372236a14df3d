use serde::Deserialize;

/// Minimal shape shared by blob, tree and commit creation responses.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShaResponse {
    pub sha: String,
}
