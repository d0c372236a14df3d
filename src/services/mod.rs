pub mod branch_publisher;
pub mod orchestrator;
pub mod rate_limiter;
pub mod repository_fetcher;
pub mod retrying_transport;
