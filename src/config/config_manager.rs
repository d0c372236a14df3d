use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::enums::remediation_provider::RemediationProvider;
use crate::errors::{RemediatorError, RemediatorResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

const SAMPLE_CONFIG: &str = r#"# repo-remediator configuration

[github]
api_base_url = "https://api.github.com"
# Repository URLs must point at one of these hosts
allowed_hosts = ["github.com"]
# Environment variable holding the API token
token_env = "GITHUB_TOKEN"
user_agent = "repo-remediator"

[fetch]
# Directory levels below the root that are still listed
max_depth = 10
# Larger files are skipped
max_file_size = "1MB"
# Folder names skipped at any depth, merged with per-request exclusions
exclude_folders = [".git", "node_modules"]

[transport]
timeout_secs = 10
# Total attempts for network errors and 5xx responses
max_retries = 3
base_delay_ms = 1000

[rate_limit]
calls = 50
period_secs = 60

[operation]
deadline_secs = 600
commit_message = "Remediated code"

[remediation]
# "passthrough" republishes content unchanged, "http" calls a remediation service
provider = "passthrough"
# base_url = "https://remediation.example.com/v1"
api_key_env = "REMEDIATION_API_KEY"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Loads `path` (or the default location). A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> RemediatorResult<Config> {
        let location = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !location.exists() {
            if path.is_some() {
                return Err(RemediatorError::config_error(
                    &format!("configuration file {} does not exist", location.display()),
                    None,
                ));
            }
            log::debug!("No configuration at {}, using defaults", location.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", location.display());
        let content = fs::read_to_string(&location)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: Option<&Path>) -> RemediatorResult<PathBuf> {
        let location = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if location.exists() {
            return Err(RemediatorError::config_error(
                &format!("{} already exists", location.display()),
                None,
            ));
        }

        if let Some(parent) = location.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&location, SAMPLE_CONFIG)?;

        Ok(location)
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::new();

        if config.rate_limit.calls == 0 {
            result.error("rate_limit.calls must be greater than zero");
        }
        if config.rate_limit.period_secs == 0 {
            result.error("rate_limit.period_secs must be greater than zero");
        }
        if config.transport.max_retries == 0 {
            result.error("transport.max_retries must be at least 1");
        }
        if config.transport.timeout_secs == 0 {
            result.error("transport.timeout_secs must be greater than zero");
        }
        if config.operation.deadline_secs == 0 {
            result.error("operation.deadline_secs must be greater than zero");
        }
        if let Err(e) = ConfigHelper::parse_size(&config.fetch.max_file_size) {
            result.error(e.to_string());
        }
        if reqwest::Url::parse(&config.github.api_base_url).is_err() {
            result.error(format!("github.api_base_url '{}' is not a URL", config.github.api_base_url));
        }
        if config.github.allowed_hosts.is_empty() {
            result.error("github.allowed_hosts must list at least one host");
        }
        if config.remediation.provider == RemediationProvider::Http && config.remediation.base_url.is_none() {
            result.error("remediation.base_url is required when provider = \"http\"");
        }

        if std::env::var(&config.github.token_env).is_err() {
            result.warning(format!("environment variable {} is not set", config.github.token_env));
        }
        if config.operation.deadline_secs < config.transport.timeout_secs {
            result.warning("operation.deadline_secs is shorter than a single request timeout");
        }

        result
    }

    /// Fails with the first validation error, for callers that cannot continue.
    pub fn ensure_valid(config: &Config) -> RemediatorResult<()> {
        let result = Self::validate_config(config);
        match result.errors.first() {
            Some(first) => Err(RemediatorError::config_error(first, None)),
            None => Ok(()),
        }
    }

    /// Credential lookup; secret storage itself is managed outside this tool.
    pub fn read_secret(env_var: &str) -> Option<String> {
        std::env::var(env_var).ok().filter(|value| !value.trim().is_empty())
    }
}
