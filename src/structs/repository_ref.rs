use crate::errors::RemediatorResult;
use crate::helpers::validation::{validate_branch_name, validate_repository_url};

/// A validated `host/owner/repo` URL plus the branch to read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub url: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl RepositoryRef {
    pub fn parse(url: &str, branch: &str, allowed_hosts: &[String]) -> RemediatorResult<Self> {
        let (owner, repo) = validate_repository_url(url, allowed_hosts)?;
        validate_branch_name("branch_name", branch)?;

        Ok(Self {
            url: url.to_string(),
            owner,
            repo,
            branch: branch.to_string(),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
