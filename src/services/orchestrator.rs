use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;
use crate::adapters::github_client::GitHubClient;
use crate::config::constants::ROOT_PATH;
use crate::enums::operation_state::OperationState;
use crate::errors::{RemediatorError, RemediatorResult};
use crate::helpers::paths;
use crate::helpers::validation::validate_branch_name;
use crate::services::branch_publisher::BranchPublisher;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::services::repository_fetcher::RepositoryFetcher;
use crate::services::retrying_transport::RetryingTransport;
use crate::structs::config::config::Config;
use crate::structs::deadline::Deadline;
use crate::structs::fetch_options::FetchOptions;
use crate::structs::file_map::{FileMap, RemediationMap};
use crate::structs::operation_outcome::OperationOutcome;
use crate::structs::remediation_request::RemediationRequest;
use crate::structs::remediation_response::RemediationResponse;
use crate::structs::repository_ref::RepositoryRef;
use crate::traits::clock::Clock;
use crate::traits::http_transport::HttpTransport;
use crate::traits::remediation_gateway::RemediationGateway;

struct ValidatedRequest {
    repository: RepositoryRef,
    options: FetchOptions,
    excluded_extensions: HashSet<String>,
    token: String,
}

struct Progress {
    operation_id: Uuid,
    states: Vec<OperationState>,
}

impl Progress {
    fn enter(&mut self, state: OperationState) {
        log::debug!("Operation {} -> {}", self.operation_id, state);
        self.states.push(state);
    }
}

/// Runs fetch, remediation and publication for one request and always
/// answers with a response envelope.
pub struct Orchestrator {
    config: Config,
    transport: Arc<dyn HttpTransport>,
    limiter: ApiRateLimiter,
    clock: Arc<dyn Clock>,
    gateway: Arc<dyn RemediationGateway>,
    token: Option<String>,
}

impl Orchestrator {
    pub fn new(
        config: Config,
        transport: Arc<dyn HttpTransport>,
        limiter: ApiRateLimiter,
        clock: Arc<dyn Clock>,
        gateway: Arc<dyn RemediationGateway>,
        token: Option<String>,
    ) -> Self {
        Self {
            config,
            transport,
            limiter,
            clock,
            gateway,
            token,
        }
    }

    pub async fn run(&self, request: &RemediationRequest) -> RemediationResponse {
        self.run_detailed(request).await.response
    }

    pub async fn run_detailed(&self, request: &RemediationRequest) -> OperationOutcome {
        let mut progress = Progress {
            operation_id: Uuid::new_v4(),
            states: Vec::new(),
        };

        log::info!(
            "🚀 Operation {}: {}@{} -> {}",
            progress.operation_id, request.repository_url, request.branch_name, request.new_branch_name
        );

        let response = match self.execute(request, &mut progress).await {
            Ok(branch) => {
                progress.enter(OperationState::Done);
                log::info!("✅ Operation {} published {}", progress.operation_id, branch);
                RemediationResponse::success(&branch)
            }
            Err(error) => {
                progress.enter(OperationState::Failed);
                log::error!("❌ Operation {} failed: {}", progress.operation_id, error);
                log::debug!("Details: {}", error.technical_details());
                RemediationResponse::failure(&error)
            }
        };

        OperationOutcome {
            operation_id: progress.operation_id,
            states: progress.states,
            response,
        }
    }

    async fn execute(&self, request: &RemediationRequest, progress: &mut Progress) -> RemediatorResult<String> {
        progress.enter(OperationState::Validating);
        let validated = self.validate(request)?;

        let deadline = Deadline::after(self.config.operation.deadline(), self.clock.clone());
        let transport = RetryingTransport::from_config(
            self.transport.clone(),
            self.limiter.clone(),
            self.clock.clone(),
            &self.config.transport,
        );
        let client = GitHubClient::new(
            transport,
            &self.config.github.api_base_url,
            validated.repository,
            &validated.token,
            &self.config.github.user_agent,
        )
        .with_deadline(deadline.clone());

        progress.enter(OperationState::Fetching);
        let files = RepositoryFetcher::new(&client).fetch(ROOT_PATH, &validated.options).await?;

        progress.enter(OperationState::Remediating);
        let remediated = self.remediate_all(files, &validated.excluded_extensions, &deadline).await?;

        progress.enter(OperationState::Publishing);
        BranchPublisher::new(&client, &self.config.operation.commit_message)
            .publish(&request.new_branch_name, &remediated)
            .await
    }

    /// Everything that can be checked without touching the network.
    fn validate(&self, request: &RemediationRequest) -> RemediatorResult<ValidatedRequest> {
        let repository = RepositoryRef::parse(
            &request.repository_url,
            &request.branch_name,
            &self.config.github.allowed_hosts,
        )?;
        validate_branch_name("new_branch_name", &request.new_branch_name)?;

        let max_file_size = self.config.fetch.max_file_size_bytes()?;
        let exclude_folders = self
            .config
            .fetch
            .exclude_folders
            .iter()
            .chain(request.exclude_folders())
            .cloned();
        let options = FetchOptions::new(exclude_folders, self.config.fetch.max_depth, max_file_size);

        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                RemediatorError::auth_error(&format!("no API token found in {}", self.config.github.token_env))
            })?
            .to_string();

        Ok(ValidatedRequest {
            repository,
            options,
            excluded_extensions: request.exclude_extensions().into_iter().collect(),
            token,
        })
    }

    async fn remediate_all(
        &self,
        files: FileMap,
        excluded_extensions: &HashSet<String>,
        deadline: &Deadline,
    ) -> RemediatorResult<RemediationMap> {
        let mut remediated = RemediationMap::new();

        for (path, content) in files {
            let excluded = paths::extension(&path)
                .is_some_and(|ext| excluded_extensions.contains(&ext.to_ascii_lowercase()));
            if excluded {
                log::info!("Not remediating {} (excluded extension)", path);
                continue;
            }

            deadline.check("remediation")?;

            let issues = self
                .gateway
                .analyze(&content)
                .await
                .map_err(|e| Self::remediation_failure(&path, e))?;
            log::debug!("{}: {} issues", path, issues.len());

            let updated = self
                .gateway
                .remediate(&content, &issues)
                .await
                .map_err(|e| Self::remediation_failure(&path, e))?;

            remediated.insert(path, updated);
        }

        log::info!("🔧 Remediated {} files", remediated.len());
        Ok(remediated)
    }

    fn remediation_failure(path: &str, error: RemediatorError) -> RemediatorError {
        match error {
            RemediatorError::Remediation { reason, .. } => RemediatorError::remediation_error(path, &reason),
            other => RemediatorError::remediation_error(path, &other.to_string()),
        }
    }
}
