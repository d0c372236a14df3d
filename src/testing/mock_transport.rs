//! In-memory transport: no sockets, no loopback servers.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::enums::http_method::HttpMethod;
use crate::structs::http::http_error::HttpError;
use crate::structs::http::http_request::HttpRequest;
use crate::structs::http::http_response::HttpResponse;
use crate::traits::http_transport::HttpTransport;

type Outcome = Result<HttpResponse, HttpError>;

#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Default)]
struct MockTransportInner {
    routes: HashMap<(HttpMethod, String), VecDeque<Outcome>>,
    requests: Vec<HttpRequest>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome for a method + URL. Outcomes for the same key are
    /// returned in FIFO order.
    pub fn push(&self, method: HttpMethod, url: impl Into<String>, outcome: Outcome) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner
            .routes
            .entry((method, url.into()))
            .or_default()
            .push_back(outcome);
    }

    pub fn push_response(&self, method: HttpMethod, url: impl Into<String>, response: HttpResponse) {
        self.push(method, url, Ok(response));
    }

    pub fn push_json(&self, method: HttpMethod, url: impl Into<String>, status: u16, body: serde_json::Value) {
        self.push(method, url, Ok(HttpResponse::json_body(status, &body)));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).requests.clone()
    }

    /// Requests whose method matches and whose URL ends with `suffix`.
    pub fn requests_to(&self, method: HttpMethod, suffix: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.url.ends_with(suffix))
            .collect()
    }

    /// Writes only: every non-GET request, in issue order, as `"POST .../git/blobs"`.
    pub fn write_log(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter(|r| r.method != HttpMethod::Get)
            .map(|r| format!("{} {}", r.method.as_str(), r.url))
            .collect()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());

        let key = (request.method, request.url.clone());
        inner.requests.push(request);

        match inner.routes.get_mut(&key).and_then(|q| q.pop_front()) {
            Some(outcome) => outcome,
            None => Err(HttpError::NoMockResponse {
                method: key.0.as_str().to_string(),
                url: key.1,
            }),
        }
    }
}
