use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ytdlp_helper::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Logs go to stderr so prompts on stdout stay readable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting ytdlp-helper v{}", env!("CARGO_PKG_VERSION"));

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Exiting with code {}: {:?}", err.exit_code(), err);
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
