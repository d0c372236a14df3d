#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub listings: usize,
    pub files_fetched: usize,
    pub excluded_folders: usize,
    pub depth_cutoffs: usize,
    pub oversize_files: usize,
    pub unsupported_entries: usize,
}

impl FetchReport {
    pub fn skipped(&self) -> usize {
        self.excluded_folders + self.depth_cutoffs + self.oversize_files + self.unsupported_entries
    }

    pub fn log_summary(&self, repository: &str) {
        log::info!(
            "Fetched {} files from {} ({} listings, {} excluded folders, {} depth cutoffs, {} oversize files, {} unsupported entries)",
            self.files_fetched,
            repository,
            self.listings,
            self.excluded_folders,
            self.depth_cutoffs,
            self.oversize_files,
            self.unsupported_entries,
        );
    }
}
