use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::constants::GITHUB_ACCEPT;
use crate::errors::{RemediatorError, RemediatorResult};
use crate::helpers::pagination::next_page_url;
use crate::services::retrying_transport::RetryingTransport;
use crate::structs::deadline::Deadline;
use crate::structs::http::http_request::{HttpHeaders, HttpRequest};
use crate::structs::http::http_response::HttpResponse;
use crate::structs::repository_ref::RepositoryRef;
use crate::structs::tree_entry::TreeEntry;

/// Per-operation context for one repository: endpoint layout, shared
/// credentials and the transport every component goes through.
pub struct GitHubClient {
    transport: RetryingTransport,
    api_base_url: String,
    repository: RepositoryRef,
    headers: HttpHeaders,
    deadline: Option<Deadline>,
}

impl GitHubClient {
    pub fn new(transport: RetryingTransport, api_base_url: &str, repository: RepositoryRef, token: &str, user_agent: &str) -> Self {
        let headers = vec![
            ("Authorization".to_string(), format!("token {}", token)),
            ("Accept".to_string(), GITHUB_ACCEPT.to_string()),
            ("User-Agent".to_string(), user_agent.to_string()),
        ];

        Self {
            transport,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            repository,
            headers,
            deadline: None,
        }
    }

    /// Every call made through this client first checks `deadline`.
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.transport = self.transport.with_deadline(deadline.clone());
        self.deadline = Some(deadline);
        self
    }

    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    fn repo_url(&self, segments: &[&str]) -> RemediatorResult<Url> {
        let mut url = Url::parse(&self.api_base_url).map_err(|e| {
            RemediatorError::config_error(&format!("invalid api_base_url: {}", e), Some("github.api_base_url"))
        })?;

        url.path_segments_mut()
            .map_err(|_| RemediatorError::config_error("api_base_url cannot be a base", Some("github.api_base_url")))?
            .pop_if_empty()
            .extend(["repos", self.repository.owner.as_str(), self.repository.repo.as_str()])
            .extend(segments.iter().filter(|s| !s.is_empty()));

        Ok(url)
    }

    /// `repos/{owner}/{repo}/contents/{path}?ref={branch}`
    pub fn contents_url(&self, path: &str) -> RemediatorResult<String> {
        let mut segments = vec!["contents"];
        segments.extend(path.split('/'));
        let mut url = self.repo_url(&segments)?;
        url.query_pairs_mut().append_pair("ref", &self.repository.branch);
        Ok(url.to_string())
    }

    /// `repos/{owner}/{repo}/git/{segments..}`
    pub fn git_url(&self, segments: &[&str]) -> RemediatorResult<String> {
        let mut all = vec!["git"];
        all.extend_from_slice(segments);
        Ok(self.repo_url(&all)?.to_string())
    }

    fn check_deadline(&self, stage: &str) -> RemediatorResult<()> {
        match &self.deadline {
            Some(deadline) => deadline.check(stage),
            None => Ok(()),
        }
    }

    pub async fn get(&self, url: &str) -> RemediatorResult<HttpResponse> {
        self.check_deadline(url)?;
        self.transport.execute(HttpRequest::get(url).with_headers(&self.headers)).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> RemediatorResult<T> {
        self.get(url).await?.json()
    }

    /// `None` when the resource does not exist.
    pub async fn probe_json<T: DeserializeOwned>(&self, url: &str) -> RemediatorResult<Option<T>> {
        self.check_deadline(url)?;
        let response = self.transport.probe(HttpRequest::get(url).with_headers(&self.headers)).await?;
        response.map(|r| r.json()).transpose()
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> RemediatorResult<T> {
        self.check_deadline(url)?;
        let request = HttpRequest::post_json(url, body)?.with_headers(&self.headers);
        self.transport.execute(request).await?.json()
    }

    /// Single-attempt POST for writes that must not be repeated.
    pub async fn post_json_once<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> RemediatorResult<T> {
        self.check_deadline(url)?;
        let request = HttpRequest::post_json(url, body)?.with_headers(&self.headers);
        self.transport.execute_once(request).await?.json()
    }

    /// Lists one directory, following `Link: rel="next"` pages in order.
    pub async fn list_directory(&self, path: &str) -> RemediatorResult<Vec<TreeEntry>> {
        let mut entries = Vec::new();
        let mut next = Some(self.contents_url(path)?);

        while let Some(url) = next {
            let response = self.get(&url).await?;
            let page: Vec<TreeEntry> = response.json()?;
            entries.extend(page);
            next = response.header("link").and_then(next_page_url);
        }

        Ok(entries)
    }

    pub async fn download(&self, url: &str) -> RemediatorResult<Vec<u8>> {
        Ok(self.get(url).await?.body)
    }
}
