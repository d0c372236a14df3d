use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::adapters::http_remediation_gateway::HttpRemediationGateway;
use crate::adapters::passthrough_gateway::PassthroughGateway;
use crate::adapters::reqwest_transport::ReqwestTransport;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::remediation_provider::RemediationProvider;
use crate::errors::{RemediatorError, RemediatorResult};
use crate::helpers::system_clock::SystemClock;
use crate::services::orchestrator::Orchestrator;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::config::config::Config;
use crate::structs::remediation_request::RemediationRequest;
use crate::traits::clock::Clock;
use crate::traits::remediation_gateway::RemediationGateway;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    /// Returns `false` when the command ran but the operation it performed failed.
    pub async fn run_command(&mut self, command: Commands) -> RemediatorResult<bool> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().map(|_| true),
            Commands::Validate => self.validate_command(),
            Commands::Run {
                request,
                repository_url,
                branch_name,
                new_branch_name,
                exclude_folders,
                exclude_extensions,
            } => {
                let request = match request {
                    Some(path) => Self::read_request(&path),
                    None => Self::request_from_flags(
                        repository_url,
                        branch_name,
                        new_branch_name,
                        exclude_folders,
                        exclude_extensions,
                    ),
                };
                match request {
                    Ok(request) => self.run_remediation(&request).await,
                    Err(e) => Err(e),
                }
            }
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> RemediatorResult<()> {
        log::info!("🚀 Initializing repo-remediator configuration...");

        match ConfigManager::create_sample_config(self.config_path.as_deref()) {
            Ok(path) => {
                log::info!("✅ Configuration written to {}", path.display());
                log::info!("🔧 Run 'repo-remediator validate' to check it.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> RemediatorResult<bool> {
        log::info!("🔍 Validating configuration...");

        let config = self.load_config()?;
        let result = ConfigManager::validate_config(&config);
        result.print_summary();

        Ok(result.is_valid)
    }

    async fn run_remediation(&self, request: &RemediationRequest) -> RemediatorResult<bool> {
        let config = self.load_config()?;
        ConfigManager::ensure_valid(&config)?;

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let transport = ReqwestTransport::with_timeout(config.transport.timeout())?;
        let limiter = ApiRateLimiter::from_config(&config.rate_limit, clock.clone());
        let gateway = Self::build_gateway(&config)?;
        let token = ConfigManager::read_secret(&config.github.token_env);

        let orchestrator = Orchestrator::new(config, Arc::new(transport), limiter, clock, gateway, token);
        let response = orchestrator.run(request).await;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(response.is_success())
    }

    fn load_config(&self) -> RemediatorResult<Config> {
        ConfigManager::load(self.config_path.as_deref()).inspect_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'repo-remediator init' to create a configuration file.");
        })
    }

    pub fn build_gateway(config: &Config) -> RemediatorResult<Arc<dyn RemediationGateway>> {
        match config.remediation.provider {
            RemediationProvider::Passthrough => Ok(Arc::new(PassthroughGateway)),
            RemediationProvider::Http => {
                let base_url = config.remediation.base_url.as_deref().ok_or_else(|| {
                    RemediatorError::config_error("remediation.base_url is not set", Some("remediation.base_url"))
                })?;
                let api_key = ConfigManager::read_secret(&config.remediation.api_key_env).unwrap_or_default();
                if api_key.is_empty() {
                    log::warn!("⚠️ {} is not set, calling the remediation service without a key", config.remediation.api_key_env);
                }
                let gateway = HttpRemediationGateway::new(base_url, &api_key, config.transport.timeout())?;
                Ok(Arc::new(gateway))
            }
        }
    }

    pub fn read_request(path: &Path) -> RemediatorResult<RemediationRequest> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn request_from_flags(
        repository_url: Option<String>,
        branch_name: Option<String>,
        new_branch_name: Option<String>,
        exclude_folders: Vec<String>,
        exclude_extensions: Vec<String>,
    ) -> RemediatorResult<RemediationRequest> {
        let missing = |field: &str| RemediatorError::validation_error(field, "", "required when --request is not given");

        let repository_url = repository_url.ok_or_else(|| missing("repository_url"))?;
        let branch_name = branch_name.ok_or_else(|| missing("branch_name"))?;
        let new_branch_name = new_branch_name.ok_or_else(|| missing("new_branch_name"))?;

        let mut request = RemediationRequest::new(&repository_url, &branch_name, &new_branch_name);
        request.exclude_folders = Some(exclude_folders);
        request.exclude_extensions = Some(exclude_extensions);
        Ok(request)
    }
}
