use uuid::Uuid;
use crate::enums::operation_state::OperationState;
use crate::structs::remediation_response::RemediationResponse;

/// Result of one operation together with the states it passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome {
    pub operation_id: Uuid,
    pub states: Vec<OperationState>,
    pub response: RemediationResponse,
}

impl OperationOutcome {
    pub fn final_state(&self) -> Option<OperationState> {
        self.states.last().copied()
    }
}
