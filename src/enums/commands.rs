use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Fetch, remediate and publish a repository as a new branch
    Run {
        /// Read the whole request from a JSON file instead of flags
        #[clap(long, conflicts_with_all = ["repository_url", "branch_name", "new_branch_name"])]
        request: Option<PathBuf>,
        #[clap(long)]
        repository_url: Option<String>,
        #[clap(long)]
        branch_name: Option<String>,
        #[clap(long)]
        new_branch_name: Option<String>,
        #[clap(long = "exclude-folder")]
        exclude_folders: Vec<String>,
        #[clap(long = "exclude-extension")]
        exclude_extensions: Vec<String>,
    },
}
