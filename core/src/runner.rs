//! External command execution
//!
//! Probes delegate their real work to external admin tools, so the only
//! execution facility they need is "run this shell line and tell me whether
//! it succeeded". Output is captured into failure text but not otherwise
//! parsed.

use async_trait::async_trait;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

/// Errors from running an external command
#[derive(Error, Debug)]
pub enum ExecError {
    /// The command could not be launched at all
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited non-zero
    #[error("`{command}` failed with {status}: {stderr}")]
    NonZero {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// Free-form failure reported by a runner implementation
    #[error("{0}")]
    Message(String),
}

/// Executes a shell command line on behalf of a probe
///
/// Injected into probes so tests can substitute a scripted implementation.
#[async_trait]
pub trait CommandRunner {
    /// Run `command` through the shell, discarding output on success
    async fn run(&self, command: &str) -> Result<(), ExecError>;
}

#[async_trait]
impl<T: CommandRunner + Send + Sync + ?Sized> CommandRunner for std::sync::Arc<T> {
    async fn run(&self, command: &str) -> Result<(), ExecError> {
        (**self).run(command).await
    }
}

/// Runs commands through `bash -c`
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    /// Create a new shell runner
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<(), ExecError> {
        debug!("Running command: {}", command);

        let output = Command::new("bash")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| ExecError::Spawn {
                command: command.to_string(),
                source: e,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!("Command failed with {}: {}", output.status, stderr);
        Err(ExecError::NonZero {
            command: command.to_string(),
            status: output.status,
            stderr,
        })
    }
}
