use crate::core::DownloadCommand;
use crate::error::{HelperError, Result};
use async_trait::async_trait;
use std::io;
use tokio::process::Command;
use tracing::{debug, info};

/// Executes a built command and waits for it to finish.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, command: &DownloadCommand) -> Result<()>;
}

/// Runs the command as a child process found through `PATH`, sharing this process's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct YtDlpRunner;

impl YtDlpRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolRunner for YtDlpRunner {
    async fn run(&self, command: &DownloadCommand) -> Result<()> {
        let program = command.program().to_string();
        info!("Spawning {} with {} arguments", program, command.args().len());

        let status = Command::new(&program)
            .args(command.args())
            .status()
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => HelperError::ToolNotFound {
                    program: program.clone(),
                },
                _ => HelperError::Spawn {
                    program: program.clone(),
                    source,
                },
            })?;

        debug!("{} finished with {}", program, status);
        if status.success() {
            Ok(())
        } else {
            Err(HelperError::ToolFailed {
                program,
                code: status.code(),
            })
        }
    }
}
