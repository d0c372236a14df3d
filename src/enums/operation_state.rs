use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    Validating,
    Fetching,
    Remediating,
    Publishing,
    Done,
    Failed,
}

impl OperationState {
    pub fn is_terminal(self) -> bool {
        matches!(self, OperationState::Done | OperationState::Failed)
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationState::Validating => "validating",
            OperationState::Fetching => "fetching",
            OperationState::Remediating => "remediating",
            OperationState::Publishing => "publishing",
            OperationState::Done => "done",
            OperationState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}
