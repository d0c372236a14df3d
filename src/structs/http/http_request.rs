use serde::Serialize;
use crate::enums::http_method::HttpMethod;
use crate::errors::RemediatorResult;

/// HTTP headers represented as key/value pairs.
///
/// Header names are treated case-insensitively by [`header_get`].
pub type HttpHeaders = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post_json<T: Serialize>(url: impl Into<String>, payload: &T) -> RemediatorResult<Self> {
        let mut request = Self::new(HttpMethod::Post, url);
        request.body = serde_json::to_vec(payload)?;
        request.headers.push(("Content-Type".to_string(), "application/json".to_string()));
        Ok(request)
    }

    pub fn with_headers(mut self, headers: &HttpHeaders) -> Self {
        self.headers.extend(headers.iter().cloned());
        self
    }
}

/// Get the first header value matching `name` (case-insensitive).
pub fn header_get<'a>(headers: &'a HttpHeaders, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_get_is_case_insensitive_and_returns_first_match() {
        let headers: HttpHeaders = vec![
            ("X-RateLimit-Remaining".to_string(), "0".to_string()),
            ("x-ratelimit-remaining".to_string(), "10".to_string()),
        ];
        assert_eq!(header_get(&headers, "x-ratelimit-remaining"), Some("0"));
        assert_eq!(header_get(&headers, "retry-after"), None);
    }

    #[test]
    fn post_json_sets_body_and_content_type() {
        let request = HttpRequest::post_json("https://x/y", &serde_json::json!({"sha": "abc"})).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(header_get(&request.headers, "content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body["sha"], "abc");
    }
}
