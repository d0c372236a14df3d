pub mod commands;
pub mod entry_kind;
pub mod http_method;
pub mod operation_state;
pub mod remediation_provider;
