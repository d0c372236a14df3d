pub mod config;
pub mod fetch_config;
pub mod github_config;
pub mod operation_config;
pub mod rate_limit_config;
pub mod remediation_config;
pub mod transport_config;
