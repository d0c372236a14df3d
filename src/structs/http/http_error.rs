use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("http transport error: {0}")]
    Transport(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("no mock response registered for {method} {url}")]
    NoMockResponse { method: String, url: String },
}
