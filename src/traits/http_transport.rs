use async_trait::async_trait;
use crate::structs::http::http_error::HttpError;
use crate::structs::http::http_request::HttpRequest;
use crate::structs::http::http_response::HttpResponse;

/// Transport boundary for all HTTP I/O.
///
/// Implementations perform exactly one exchange per call: no retries, no
/// status interpretation. Anything non-2xx is returned as a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}
