pub mod http_error;
pub mod http_request;
pub mod http_response;
