use std::sync::Arc;
use serde_json::{json, Value};
use repo_remediator::adapters::passthrough_gateway::PassthroughGateway;
use repo_remediator::enums::http_method::HttpMethod;
use repo_remediator::services::orchestrator::Orchestrator;
use repo_remediator::services::rate_limiter::ApiRateLimiter;
use repo_remediator::structs::config::config::Config;
use repo_remediator::structs::http::http_response::HttpResponse;
use repo_remediator::structs::remediation_request::RemediationRequest;
use repo_remediator::testing::manual_clock::ManualClock;
use repo_remediator::testing::mock_transport::MockTransport;

pub const API: &str = "https://api.github.com/repos/acme/widgets";
pub const RAW: &str = "https://raw.githubusercontent.com/acme/widgets/main";

pub struct Harness {
    pub mock: MockTransport,
    pub clock: Arc<ManualClock>,
    pub config: Config,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            mock: MockTransport::new(),
            clock: Arc::new(ManualClock::new()),
            config: Config::default(),
        }
    }

    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::new(
            self.config.clone(),
            Arc::new(self.mock.clone()),
            ApiRateLimiter::from_config(&self.config.rate_limit, self.clock.clone()),
            self.clock.clone(),
            Arc::new(PassthroughGateway),
            Some("test-token".to_string()),
        )
    }

    pub fn listing(&self, path: &str, entries: Value) {
        let url = if path.is_empty() {
            format!("{}/contents?ref=main", API)
        } else {
            format!("{}/contents/{}?ref=main", API, path)
        };
        self.mock.push_json(HttpMethod::Get, url, 200, entries);
    }

    pub fn raw_file(&self, path: &str, body: &str) {
        self.mock
            .push_response(HttpMethod::Get, format!("{}/{}", RAW, path), HttpResponse::new(200, body));
    }

    pub fn branch(&self, name: &str, sha: &str) {
        self.mock.push_json(
            HttpMethod::Get,
            format!("{}/git/refs/heads/{}", API, name),
            200,
            json!({"ref": format!("refs/heads/{}", name), "object": {"sha": sha, "type": "commit"}}),
        );
    }

    pub fn no_branch(&self, name: &str) {
        self.mock.push_json(
            HttpMethod::Get,
            format!("{}/git/refs/heads/{}", API, name),
            404,
            json!({"message": "Not Found"}),
        );
    }

    /// Blob, tree and commit creation for `blob_count` files on top of `base-commit`.
    pub fn object_writes(&self, blob_count: usize) {
        for i in 0..blob_count {
            self.mock
                .push_json(HttpMethod::Post, format!("{}/git/blobs", API), 201, json!({"sha": format!("blob-{}", i)}));
        }
        self.mock.push_json(
            HttpMethod::Get,
            format!("{}/git/trees/base-commit", API),
            200,
            json!({"sha": "base-tree", "tree": []}),
        );
        self.mock
            .push_json(HttpMethod::Post, format!("{}/git/trees", API), 201, json!({"sha": "new-tree"}));
        self.mock
            .push_json(HttpMethod::Post, format!("{}/git/commits", API), 201, json!({"sha": "new-commit"}));
    }

    pub fn ref_created(&self, name: &str) {
        self.mock.push_json(
            HttpMethod::Post,
            format!("{}/git/refs", API),
            201,
            json!({"ref": format!("refs/heads/{}", name), "object": {"sha": "new-commit"}}),
        );
    }

    pub fn body(&self, method: HttpMethod, suffix: &str, index: usize) -> Value {
        let requests = self.mock.requests_to(method, suffix);
        serde_json::from_slice(&requests[index].body).unwrap()
    }
}

pub fn file(path: &str, size: u64) -> Value {
    json!({"type": "file", "path": path, "size": size, "download_url": format!("{}/{}", RAW, path)})
}

pub fn dir(path: &str) -> Value {
    json!({"type": "dir", "path": path, "size": 0, "download_url": null})
}

pub fn request(new_branch: &str) -> RemediationRequest {
    RemediationRequest::new("https://github.com/acme/widgets", "main", new_branch)
}
