use serde::{Deserialize, Serialize};
use crate::errors::RemediatorError;

/// Output envelope: `{"new_branch_name": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RemediationResponse {
    Success { new_branch_name: String },
    Failure { error: String },
}

impl RemediationResponse {
    pub fn success(new_branch_name: &str) -> Self {
        Self::Success {
            new_branch_name: new_branch_name.to_string(),
        }
    }

    pub fn failure(error: &RemediatorError) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_envelopes() {
        let ok = serde_json::to_value(RemediationResponse::success("fix-1")).unwrap();
        assert_eq!(ok, serde_json::json!({"new_branch_name": "fix-1"}));

        let err = serde_json::to_value(RemediationResponse::failure(&RemediatorError::conflict("fix-1"))).unwrap();
        assert_eq!(err, serde_json::json!({"error": "Branch 'fix-1' already exists"}));
    }
}
