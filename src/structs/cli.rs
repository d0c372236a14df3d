use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "repo-remediator")]
#[clap(about = "Remediate a remote repository and publish the result as a new branch", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/.repo-remediator/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
