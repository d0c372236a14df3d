pub mod github_client;
pub mod http_remediation_gateway;
pub mod passthrough_gateway;
pub mod reqwest_transport;
