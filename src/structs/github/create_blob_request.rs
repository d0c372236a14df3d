use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CreateBlobRequest {
    pub content: String,
    pub encoding: String,
}

impl CreateBlobRequest {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            content: STANDARD.encode(bytes),
            encoding: "base64".to_string(),
        }
    }
}
