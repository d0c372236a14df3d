use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CreateCommitRequest {
    pub message: String,
    pub tree: String,
    pub parents: Vec<String>,
}
