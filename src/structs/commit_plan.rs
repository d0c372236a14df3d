/// State accumulated by one publication.
///
/// `base_commit_sha` is captured once when the plan is created and never re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPlan {
    pub base_branch: String,
    pub new_branch: String,
    pub base_commit_sha: String,
    pub base_tree_sha: Option<String>,
    pub blobs: Vec<(String, String)>,
}

impl CommitPlan {
    pub fn new(base_branch: &str, new_branch: &str, base_commit_sha: &str) -> Self {
        Self {
            base_branch: base_branch.to_string(),
            new_branch: new_branch.to_string(),
            base_commit_sha: base_commit_sha.to_string(),
            base_tree_sha: None,
            blobs: Vec::new(),
        }
    }

    pub fn add_blob(&mut self, path: &str, sha: &str) {
        self.blobs.push((path.to_string(), sha.to_string()));
    }
}
