use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::core::YtDlpRunner;
use crate::error::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;

pub mod driver;

pub use driver::{Driver, MAX_URL_ATTEMPTS};

#[derive(Parser)]
#[command(name = "ytdlp-helper")]
#[command(about = "Interactive front-end that assembles and runs yt-dlp downloads")]
#[command(version)]
pub struct Cli {
    /// TOML file with download paths and default selections
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Print the yt-dlp command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load(&self.config)?;
        info!("Configuration resolved from {}", self.config.display());

        let stdin = io::stdin();
        let mut driver = Driver::new(config, stdin.lock(), io::stdout(), YtDlpRunner::new())
            .dry_run(self.dry_run);
        driver.run().await?;

        Ok(())
    }
}
