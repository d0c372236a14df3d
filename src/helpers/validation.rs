use reqwest::Url;
use crate::errors::{RemediatorError, RemediatorResult};

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Accepts `[word chars and '-']+`, the same charset used for owners and repositories.
pub fn validate_branch_name(field: &str, branch: &str) -> RemediatorResult<()> {
    if !is_identifier(branch) {
        return Err(RemediatorError::validation_error(
            field,
            branch,
            "letters, digits, '_' or '-' only",
        ));
    }
    Ok(())
}

/// Checks `scheme://host/owner/repo[/]` against the allowed hosts and returns `(owner, repo)`.
pub fn validate_repository_url(url: &str, allowed_hosts: &[String]) -> RemediatorResult<(String, String)> {
    let invalid = |constraint: &str| RemediatorError::validation_error("repository_url", url, constraint);

    let parsed = Url::parse(url).map_err(|_| invalid("must be an absolute URL"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }

    let host = parsed.host_str().unwrap_or_default();
    if !allowed_hosts.iter().any(|allowed| allowed.eq_ignore_ascii_case(host)) {
        return Err(invalid(&format!("host must be one of: {}", allowed_hosts.join(", "))));
    }

    let path = parsed.path().strip_prefix('/').unwrap_or_default();
    let path = path.strip_suffix('/').unwrap_or(path);
    let mut segments = path.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(repo), None) if is_identifier(owner) && is_identifier(repo) => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(invalid("path must be /owner/repo")),
    }
}
