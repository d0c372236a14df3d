pub mod api_response;
pub mod cli;
pub mod commit_plan;
pub mod config;
pub mod deadline;
pub mod fetch_options;
pub mod fetch_report;
pub mod file_map;
pub mod github;
pub mod http;
pub mod operation_outcome;
pub mod remediation_request;
pub mod remediation_response;
pub mod repository_ref;
pub mod tree_entry;
pub mod validation_result;
