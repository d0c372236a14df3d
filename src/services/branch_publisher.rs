use crate::adapters::github_client::GitHubClient;
use crate::errors::{RemediatorError, RemediatorResult};
use crate::structs::commit_plan::CommitPlan;
use crate::structs::file_map::RemediationMap;
use crate::structs::github::create_blob_request::CreateBlobRequest;
use crate::structs::github::create_commit_request::CreateCommitRequest;
use crate::structs::github::create_ref_request::CreateRefRequest;
use crate::structs::github::create_tree_request::CreateTreeRequest;
use crate::structs::github::git_ref::GitRef;
use crate::structs::github::git_tree::GitTree;
use crate::structs::github::sha_response::ShaResponse;
use crate::structs::github::tree_item::TreeItem;

/// Publishes a set of file replacements as a new branch.
///
/// Blobs, the tree and the commit are unreferenced until the final ref
/// creation, so the branch list of the repository only changes at that last
/// call. A failure anywhere earlier leaves nothing visible behind.
pub struct BranchPublisher<'a> {
    client: &'a GitHubClient,
    commit_message: String,
}

impl<'a> BranchPublisher<'a> {
    pub fn new(client: &'a GitHubClient, commit_message: &str) -> Self {
        Self {
            client,
            commit_message: commit_message.to_string(),
        }
    }

    pub async fn publish(&self, new_branch: &str, files: &RemediationMap) -> RemediatorResult<String> {
        let base_branch = self.client.repository().branch.clone();

        let base = self
            .resolve_branch(&base_branch)
            .await?
            .ok_or_else(|| RemediatorError::not_found(&format!("branch '{}'", base_branch)))?;

        if self.branch_exists(new_branch).await? {
            log::warn!("Branch {} already exists, nothing written", new_branch);
            return Err(RemediatorError::conflict(new_branch));
        }

        let mut plan = CommitPlan::new(&base_branch, new_branch, &base.object.sha);
        log::info!("🌿 Publishing {} files from {}@{}", files.len(), plan.base_branch, plan.base_commit_sha);

        self.create_blobs(&mut plan, files).await?;
        let tree_sha = self.create_tree(&mut plan).await?;
        let commit_sha = self.create_commit(&plan, &tree_sha).await?;
        self.create_branch(&plan, &commit_sha).await?;

        log::info!("✅ Created branch {} at {}", plan.new_branch, commit_sha);
        Ok(plan.new_branch)
    }

    /// Current ref of `branch`, or `None` when it does not exist.
    ///
    /// The refs endpoint falls back to prefix matching and answers with an
    /// array when there is no exact match, which also counts as absent.
    pub async fn resolve_branch(&self, branch: &str) -> RemediatorResult<Option<GitRef>> {
        let url = self.client.git_url(&["refs", "heads", branch])?;
        let Some(value) = self.client.probe_json::<serde_json::Value>(&url).await? else {
            return Ok(None);
        };

        if value.is_array() {
            log::debug!("No exact ref for {}, only prefix matches", branch);
            return Ok(None);
        }

        let found: GitRef = serde_json::from_value(value)?;
        if found.reference != format!("refs/heads/{}", branch) {
            return Ok(None);
        }

        Ok(Some(found))
    }

    pub async fn branch_exists(&self, branch: &str) -> RemediatorResult<bool> {
        Ok(self.resolve_branch(branch).await?.is_some())
    }

    async fn create_blobs(&self, plan: &mut CommitPlan, files: &RemediationMap) -> RemediatorResult<()> {
        let url = self.client.git_url(&["blobs"])?;

        for (path, content) in files {
            let blob: ShaResponse = self.client.post_json(&url, &CreateBlobRequest::from_bytes(content)).await?;
            log::debug!("Blob {} for {}", blob.sha, path);
            plan.add_blob(path, &blob.sha);
        }

        Ok(())
    }

    async fn create_tree(&self, plan: &mut CommitPlan) -> RemediatorResult<String> {
        let base_tree: GitTree = self
            .client
            .get_json(&self.client.git_url(&["trees", &plan.base_commit_sha])?)
            .await?;
        plan.base_tree_sha = Some(base_tree.sha.clone());

        let request = CreateTreeRequest {
            base_tree: base_tree.sha,
            tree: plan.blobs.iter().map(|(path, sha)| TreeItem::blob(path, sha)).collect(),
        };

        let tree: ShaResponse = self.client.post_json(&self.client.git_url(&["trees"])?, &request).await?;
        log::debug!("Tree {} layered on {:?}", tree.sha, plan.base_tree_sha);
        Ok(tree.sha)
    }

    async fn create_commit(&self, plan: &CommitPlan, tree_sha: &str) -> RemediatorResult<String> {
        let request = CreateCommitRequest {
            message: self.commit_message.clone(),
            tree: tree_sha.to_string(),
            parents: vec![plan.base_commit_sha.clone()],
        };

        let commit: ShaResponse = self.client.post_json(&self.client.git_url(&["commits"])?, &request).await?;
        log::debug!("Commit {}", commit.sha);
        Ok(commit.sha)
    }

    /// The only externally visible write, attempted exactly once.
    async fn create_branch(&self, plan: &CommitPlan, commit_sha: &str) -> RemediatorResult<()> {
        let request = CreateRefRequest::branch(&plan.new_branch, commit_sha);

        let created: RemediatorResult<GitRef> = self
            .client
            .post_json_once(&self.client.git_url(&["refs"])?, &request)
            .await;

        match created {
            Ok(_) => Ok(()),
            // Created concurrently between the existence check and now.
            Err(RemediatorError::Http { status: 422, .. }) => Err(RemediatorError::conflict(&plan.new_branch)),
            Err(e) => Err(e),
        }
    }
}
