use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CreateRefRequest {
    #[serde(rename = "ref")]
    pub reference: String,
    pub sha: String,
}

impl CreateRefRequest {
    pub fn branch(name: &str, sha: &str) -> Self {
        Self {
            reference: format!("refs/heads/{}", name),
            sha: sha.to_string(),
        }
    }
}
