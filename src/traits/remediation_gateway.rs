use std::collections::BTreeSet;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::errors::RemediatorResult;

/// External analysis/remediation capability.
///
/// Issue tags are opaque strings. `remediate` may return its input unchanged.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RemediationGateway: Send + Sync {
    async fn analyze(&self, content: &[u8]) -> RemediatorResult<BTreeSet<String>>;

    async fn remediate(&self, content: &[u8], issues: &BTreeSet<String>) -> RemediatorResult<Vec<u8>>;
}
