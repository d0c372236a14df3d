use serde::{Deserialize, Serialize};
use crate::errors::{RemediatorError, RemediatorResult};

/// `{success, data, message}` envelope returned by the remediation service.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self, operation_name: &str) -> RemediatorResult<T> {
        if !self.success {
            log::warn!("API returned error for {}: {}", operation_name, self.message);
            return Err(RemediatorError::remediation_error(operation_name, &self.message));
        }

        self.data.ok_or_else(|| {
            RemediatorError::remediation_error(operation_name, "API response missing data field")
        })
    }
}
