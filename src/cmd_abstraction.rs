//! Command execution abstraction for testability.
//!
//! Every collaborator (neighbor table command, whitelist tool) is reached
//! through this trait, so unit tests can mock subprocess calls without
//! running them. The real implementation runs commands through tokio with
//! a hard timeout: a hung external tool must surface as an error, never
//! hold a request open or pass as a negative answer.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

#[cfg(test)]
use mockall::automock;

/// Output from command execution
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// The exit code, if available
    pub code: Option<i32>,
}

/// Trait for command execution, allowing dependency injection for testing.
///
/// `Err` means the command could not be run to completion (spawn failure,
/// timeout); a command that ran but exited non-zero is `Ok` with
/// `success == false`. Callers classify both per collaborator.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command with the given arguments, bounded by the
    /// executor's timeout.
    async fn execute(&self, cmd: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Real implementation of [`CommandExecutor`] backed by `tokio::process`.
#[derive(Debug, Clone)]
pub struct TokioCommandExecutor {
    timeout: Duration,
}

impl TokioCommandExecutor {
    /// Create an executor whose every invocation is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandExecutor for TokioCommandExecutor {
    async fn execute(&self, cmd: &str, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new(cmd)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| {
                anyhow::anyhow!("{} timed out after {:?}", cmd, self.timeout)
            })?
            .with_context(|| format!("Failed to execute {}", cmd))?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Helper function to convert a slice of &str to Vec<String>.
///
/// Mockall has issues with lifetimes in `&[&str]`, so the trait takes
/// `&[String]` and call sites use this helper.
pub fn args_to_strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
