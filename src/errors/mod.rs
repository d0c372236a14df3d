use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::structs::http::http_error::HttpError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemediatorError {
    // Input errors
    #[error("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'")]
    Validation {
        field: String,
        value: String,
        constraint: String,
    },

    // Credential errors
    #[error("Authentication error: {reason}")]
    Auth {
        reason: String,
    },

    // Remote state errors
    #[error("Not found: {resource}")]
    NotFound {
        resource: String,
    },
    #[error("Branch '{branch}' already exists")]
    Conflict {
        branch: String,
    },

    // Network/API errors
    #[error("Network error during {operation} after {attempts} attempts: {reason}")]
    TransientNetwork {
        operation: String,
        attempts: u32,
        reason: String,
    },
    #[error("HTTP {status} from {url}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    Parse {
        content_type: String,
        reason: String,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },

    #[error("Operation deadline exceeded during {stage}")]
    DeadlineExceeded {
        stage: String,
    },

    // External remediation service errors
    #[error("Remediation failed for '{path}': {reason}")]
    Remediation {
        path: String,
        reason: String,
    },
}

/// Coarse classification used by callers and tests that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    Auth,
    NotFound,
    Conflict,
    TransientNetwork,
    Http,
    Parse,
    Configuration,
    DeadlineExceeded,
    Remediation,
}

impl RemediatorError {
    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn auth_error(reason: &str) -> Self {
        Self::Auth {
            reason: reason.to_string(),
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
        }
    }

    pub fn conflict(branch: &str) -> Self {
        Self::Conflict {
            branch: branch.to_string(),
        }
    }

    pub fn transient_error(operation: &str, attempts: u32, reason: &str) -> Self {
        Self::TransientNetwork {
            operation: operation.to_string(),
            attempts,
            reason: reason.to_string(),
        }
    }

    pub fn http_error(status: u16, url: &str, body: &str) -> Self {
        Self::Http {
            status,
            url: url.to_string(),
            body: body.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::Parse {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn deadline_exceeded(stage: &str) -> Self {
        Self::DeadlineExceeded {
            stage: stage.to_string(),
        }
    }

    pub fn remediation_error(path: &str, reason: &str) -> Self {
        Self::Remediation {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::TransientNetwork { .. } => ErrorKind::TransientNetwork,
            Self::Http { .. } => ErrorKind::Http,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::DeadlineExceeded { .. } => ErrorKind::DeadlineExceeded,
            Self::Remediation { .. } => ErrorKind::Remediation,
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Result type alias for remediator operations
pub type RemediatorResult<T> = Result<T, RemediatorError>;

impl From<std::io::Error> for RemediatorError {
    fn from(error: std::io::Error) -> Self {
        RemediatorError::Configuration {
            message: format!("I/O operation failed: {}", error),
            field: None,
        }
    }
}

impl From<serde_json::Error> for RemediatorError {
    fn from(error: serde_json::Error) -> Self {
        RemediatorError::Parse {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for RemediatorError {
    fn from(error: toml::de::Error) -> Self {
        RemediatorError::Parse {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<HttpError> for RemediatorError {
    fn from(error: HttpError) -> Self {
        RemediatorError::TransientNetwork {
            operation: "HTTP request".to_string(),
            attempts: 1,
            reason: error.to_string(),
        }
    }
}
