use clap::Parser;
use repo_remediator::structs::cli::Cli;
use repo_remediator::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();

    let mut runner = CommandRunner::new(cli.config);
    if !runner.run_command(cli.command).await? {
        std::process::exit(1);
    }

    Ok(())
}
