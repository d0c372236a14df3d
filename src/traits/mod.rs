pub mod clock;
pub mod http_transport;
pub mod remediation_gateway;
