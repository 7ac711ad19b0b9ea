//! Firewall whitelist gate.
//!
//! Set-membership over the external whitelist tool, which is the sole
//! source of truth for which MACs currently have egress. The gate holds
//! no cache: the set can be edited out-of-band (administrator tooling,
//! other processes), so every query re-invokes `list` and trades latency
//! for consistency. Mutations change firewall state that outlives this
//! process.

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::cmd_abstraction::{CommandExecutor, CommandOutput, TokioCommandExecutor};
use crate::config::Config;
use crate::error::{AccessError, Collaborator};
use crate::mac::MacAddress;

/// Gate over the external whitelist tool (add/remove/list verbs).
///
/// Taking [`MacAddress`] rather than raw strings means every address has
/// already passed the grammar check before it can reach the tool.
pub struct WhitelistGate {
    executor: Arc<dyn CommandExecutor>,
    tool: String,
}

impl WhitelistGate {
    pub fn new(executor: Arc<dyn CommandExecutor>, tool: impl Into<String>) -> Self {
        Self {
            executor,
            tool: tool.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(TokioCommandExecutor::new(config.command_timeout())),
            config.whitelist_tool.clone(),
        )
    }

    /// Add a MAC to the whitelist. Tool failure or timeout is surfaced;
    /// the caller must not treat the grant as done unless this succeeds.
    pub async fn add(&self, mac: &MacAddress) -> Result<(), AccessError> {
        self.run_mutating("add", mac).await?;
        info!("MAC address whitelisted: {}", mac);
        Ok(())
    }

    /// Remove a MAC from the whitelist. Removing a non-member is a no-op
    /// success; the tool treats it as such.
    pub async fn remove(&self, mac: &MacAddress) -> Result<(), AccessError> {
        self.run_mutating("remove", mac).await?;
        info!("MAC address removed from whitelist: {}", mac);
        Ok(())
    }

    /// Whether a MAC is currently whitelisted. Exact match on normalized
    /// form. Degrades to `false` if the tool cannot be read, to keep the
    /// read path available.
    pub async fn is_member(&self, mac: &MacAddress) -> bool {
        self.list().await.iter().any(|m| m == mac)
    }

    /// Current whitelist members. Output lines that do not match the MAC
    /// grammar (headers, decoration) are dropped. Degrades to empty on
    /// tool failure.
    pub async fn list(&self) -> Vec<MacAddress> {
        let args = vec!["list".to_string()];
        match self.executor.execute(&self.tool, &args).await {
            Ok(output) if output.success => output
                .stdout
                .lines()
                .filter_map(|line| line.trim().parse::<MacAddress>().ok())
                .collect(),
            Ok(output) => {
                error!(
                    "{} list exited with code {:?}: {}",
                    self.tool,
                    output.code,
                    output.stderr.trim()
                );
                Vec::new()
            }
            Err(e) => {
                error!("Failed to run {} list: {:#}", self.tool, e);
                Vec::new()
            }
        }
    }

    async fn run_mutating(&self, verb: &str, mac: &MacAddress) -> Result<(), AccessError> {
        let args = vec![verb.to_string(), mac.to_string()];
        debug!("invoking {} {} {}", self.tool, verb, mac);

        let output = self
            .executor
            .execute(&self.tool, &args)
            .await
            .map_err(|e| AccessError::external(Collaborator::Whitelist, format!("{:#}", e)))?;

        if !output.success {
            return Err(AccessError::external(
                Collaborator::Whitelist,
                failure_reason(verb, &output),
            ));
        }
        Ok(())
    }
}

fn failure_reason(verb: &str, output: &CommandOutput) -> String {
    let stderr = output.stderr.trim();
    if stderr.is_empty() {
        format!("{} exited with code {:?}", verb, output.code)
    } else {
        format!("{} failed: {}", verb, stderr)
    }
}

/// Check if running as root (effective UID == 0).
///
/// The whitelist tool mutates firewall state and normally refuses
/// unprivileged callers; failing early here gives a clearer message.
pub fn check_root() -> Result<()> {
    // SAFETY: geteuid() reads the effective user ID. It has no
    // preconditions, never fails, and doesn't modify any state.
    let euid = unsafe { libc::geteuid() };

    if euid != 0 {
        anyhow::bail!("This operation requires root privileges. Please run with sudo.")
    }
    Ok(())
}
