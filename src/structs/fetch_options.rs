use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Folder base names skipped at every depth.
    pub exclude_folders: HashSet<String>,
    pub max_depth: usize,
    pub max_file_size: u64,
}

impl FetchOptions {
    pub fn new(exclude_folders: impl IntoIterator<Item = String>, max_depth: usize, max_file_size: u64) -> Self {
        Self {
            exclude_folders: exclude_folders.into_iter().collect(),
            max_depth,
            max_file_size,
        }
    }
}
