//! Fetches a GitHub repository tree, passes each file through a remediation
//! service and publishes the results as a new branch.

pub mod adapters;
pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod testing;
pub mod traits;
pub mod workers;

pub use errors::{RemediatorError, RemediatorResult};
pub use services::orchestrator::Orchestrator;
pub use structs::remediation_request::RemediationRequest;
pub use structs::remediation_response::RemediationResponse;
