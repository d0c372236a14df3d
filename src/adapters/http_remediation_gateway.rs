use std::collections::BTreeSet;
use std::time::Duration;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use crate::errors::{RemediatorError, RemediatorResult};
use crate::structs::api_response::ApiResponse;
use crate::traits::remediation_gateway::RemediationGateway;

#[derive(Serialize)]
struct AnalyzeRequest {
    content: String,
}

#[derive(Deserialize)]
struct AnalyzeData {
    #[serde(default)]
    issues: Vec<String>,
}

#[derive(Serialize)]
struct RemediateRequest<'a> {
    content: String,
    issues: &'a BTreeSet<String>,
}

#[derive(Deserialize)]
struct RemediateData {
    content: String,
}

/// Remediation service reached over HTTP. File content travels base64 encoded.
pub struct HttpRemediationGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpRemediationGateway {
    /// Every call, connection included, is bounded by `timeout`.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> RemediatorResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            RemediatorError::config_error(&format!("cannot build remediation client: {}", e), Some("transport.timeout_secs"))
        })?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn post_json<T, R>(&self, endpoint: &str, request_body: &T, operation_name: &str) -> RemediatorResult<R>
    where
        T: Serialize,
        R: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'));

        let response = self.client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| {
                log::warn!("Network error during {} request: {}", operation_name, e);
                RemediatorError::remediation_error(operation_name, &format!("failed to reach {}: {}", url, e))
            })?;

        let body: ApiResponse<R> = match response.status() {
            StatusCode::OK => response.json().await.map_err(|e| {
                RemediatorError::remediation_error(operation_name, &format!("invalid response format: {}", e))
            })?,
            status => {
                let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
                return Err(RemediatorError::remediation_error(
                    operation_name,
                    &format!("request failed with status {}: {}", status, error_text),
                ));
            }
        };

        body.into_data(operation_name)
    }
}

#[async_trait]
impl RemediationGateway for HttpRemediationGateway {
    async fn analyze(&self, content: &[u8]) -> RemediatorResult<BTreeSet<String>> {
        let request = AnalyzeRequest {
            content: STANDARD.encode(content),
        };
        let data: AnalyzeData = self.post_json("analyze", &request, "analyze").await?;
        Ok(data.issues.into_iter().collect())
    }

    async fn remediate(&self, content: &[u8], issues: &BTreeSet<String>) -> RemediatorResult<Vec<u8>> {
        let request = RemediateRequest {
            content: STANDARD.encode(content),
            issues,
        };
        let data: RemediateData = self.post_json("remediate", &request, "remediate").await?;
        STANDARD
            .decode(data.content.as_bytes())
            .map_err(|e| RemediatorError::remediation_error("remediate", &format!("content is not base64: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn unresponsive_service_fails_within_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let gateway =
            HttpRemediationGateway::new(&format!("http://{}", address), "key", Duration::from_millis(200)).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(10), gateway.analyze(b"print(1)")).await;

        let err = result.expect("the gateway call must give up on its own").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Remediation);
        assert!(err.to_string().contains("failed to reach"), "{}", err);
        server.abort();
    }
}
