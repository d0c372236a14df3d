use std::collections::BTreeSet;
use async_trait::async_trait;
use crate::errors::RemediatorResult;
use crate::traits::remediation_gateway::RemediationGateway;

/// Reports no issues and hands content back untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughGateway;

#[async_trait]
impl RemediationGateway for PassthroughGateway {
    async fn analyze(&self, _content: &[u8]) -> RemediatorResult<BTreeSet<String>> {
        Ok(BTreeSet::new())
    }

    async fn remediate(&self, content: &[u8], _issues: &BTreeSet<String>) -> RemediatorResult<Vec<u8>> {
        Ok(content.to_vec())
    }
}
