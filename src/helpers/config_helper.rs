use crate::errors::{RemediatorError, RemediatorResult};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_api_base_url() -> String {
        "https://api.github.com".to_string()
    }

    pub fn default_allowed_hosts() -> Vec<String> {
        vec!["github.com".to_string()]
    }

    pub fn default_token_env() -> String {
        "GITHUB_TOKEN".to_string()
    }

    pub fn default_user_agent() -> String {
        "repo-remediator".to_string()
    }

    pub fn default_max_depth() -> usize {
        10
    }

    pub fn default_max_file_size() -> String {
        "1MB".to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        10
    }

    pub fn default_max_retries() -> u32 {
        3
    }

    pub fn default_base_delay_ms() -> u64 {
        1000
    }

    pub fn default_rate_limit_calls() -> usize {
        50
    }

    pub fn default_rate_limit_period_secs() -> u64 {
        60
    }

    pub fn default_deadline_secs() -> u64 {
        600
    }

    pub fn default_commit_message() -> String {
        "Remediated code".to_string()
    }

    pub fn default_remediation_api_key_env() -> String {
        "REMEDIATION_API_KEY".to_string()
    }

    /// Parses sizes like "1MB", "512 KB" or "2048" into bytes (binary multiples).
    pub fn parse_size(value: &str) -> RemediatorResult<u64> {
        let trimmed = value.trim().to_ascii_uppercase();
        let split_at = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split_at);

        let number: u64 = number.parse().map_err(|_| {
            RemediatorError::config_error(&format!("invalid size '{}'", value), Some("fetch.max_file_size"))
        })?;

        let multiplier = match unit.trim() {
            "" | "B" => 1,
            "KB" | "K" => 1024,
            "MB" | "M" => 1024 * 1024,
            "GB" | "G" => 1024 * 1024 * 1024,
            other => {
                return Err(RemediatorError::config_error(
                    &format!("unknown size unit '{}'", other),
                    Some("fetch.max_file_size"),
                ))
            }
        };

        number.checked_mul(multiplier).ok_or_else(|| {
            RemediatorError::config_error(&format!("size '{}' is too large", value), Some("fetch.max_file_size"))
        })
    }
}
