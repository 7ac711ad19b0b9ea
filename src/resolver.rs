//! Client MAC resolution.
//!
//! Given a client IP, try an ordered list of strategies and take the
//! first hit: an explicit caller-supplied claim, then the live neighbor
//! table, then the DHCP lease file. Resolution is read-only and
//! idempotent; a fully exhausted chain is a valid "not found" outcome,
//! not an error.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cmd_abstraction::{CommandExecutor, TokioCommandExecutor};
use crate::config::Config;
use crate::error::AccessError;
use crate::fs_abstraction::{FileSystem, RealFileSystem};
use crate::leases::{find_active_mac, parse_leases, LeaseRecord};
use crate::mac::MacAddress;
use crate::neighbors::{parse_neighbors, NeighborEntry};

/// One way of mapping an IP to a MAC.
///
/// Implementations are consulted left to right by [`MacResolver`]; the
/// first `Some` wins. An `Err` means the strategy's source could not be
/// read; the resolver logs it and moves on so one broken source does not
/// take resolution down.
#[async_trait]
pub trait ResolveStrategy: Send + Sync {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    /// Attempt to resolve `ip` to a MAC address.
    async fn try_resolve(&self, ip: &str) -> Result<Option<MacAddress>>;
}

/// Live neighbor (ARP) table lookup via the neighbor command.
pub struct NeighborLookup {
    executor: Arc<dyn CommandExecutor>,
    command: String,
}

impl NeighborLookup {
    pub fn new(executor: Arc<dyn CommandExecutor>, command: impl Into<String>) -> Self {
        Self {
            executor,
            command: command.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(TokioCommandExecutor::new(config.command_timeout())),
            config.neighbor_command.clone(),
        )
    }

    /// Dump the whole neighbor table (`-an`: all entries, numeric).
    pub async fn table(&self) -> Result<Vec<NeighborEntry>> {
        let args = vec!["-an".to_string()];
        let output = self
            .executor
            .execute(&self.command, &args)
            .await
            .with_context(|| format!("Failed to run {}", self.command))?;
        if !output.success {
            anyhow::bail!(
                "{} exited with code {:?}: {}",
                self.command,
                output.code,
                output.stderr.trim()
            );
        }
        Ok(parse_neighbors(&output.stdout))
    }
}

#[async_trait]
impl ResolveStrategy for NeighborLookup {
    fn name(&self) -> &'static str {
        "neighbor-table"
    }

    async fn try_resolve(&self, ip: &str) -> Result<Option<MacAddress>> {
        let args = vec!["-an".to_string(), ip.to_string()];
        let output = self
            .executor
            .execute(&self.command, &args)
            .await
            .with_context(|| format!("Failed to run {}", self.command))?;

        // The arp command signals "no entry" through its exit code.
        if !output.success {
            debug!("no neighbor entry for {}", ip);
            return Ok(None);
        }

        Ok(parse_neighbors(&output.stdout)
            .into_iter()
            .find(|entry| entry.ip == ip)
            .map(|entry| entry.mac))
    }
}

/// DHCP lease file lookup, applying last-active-wins per IP.
pub struct LeaseLookup {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl LeaseLookup {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(RealFileSystem), config.lease_file.clone())
    }

    /// All lease records currently in the file, in file order.
    pub fn records(&self) -> Result<Vec<LeaseRecord>> {
        let content = self
            .fs
            .read_to_string(&self.path)
            .with_context(|| format!("Failed to read lease file: {:?}", self.path))?;
        Ok(parse_leases(&content))
    }
}

#[async_trait]
impl ResolveStrategy for LeaseLookup {
    fn name(&self) -> &'static str {
        "dhcp-leases"
    }

    async fn try_resolve(&self, ip: &str) -> Result<Option<MacAddress>> {
        let content = match self.fs.read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("lease file {:?} not present", self.path);
                return Ok(None);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read lease file: {:?}", self.path))
            }
        };

        let records = parse_leases(&content);
        Ok(find_active_mac(&records, ip).cloned())
    }
}

/// Ordered fallback chain from client IP to MAC address.
pub struct MacResolver {
    strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl MacResolver {
    pub fn new(strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
        Self { strategies }
    }

    /// The production chain: neighbor table first (what the OS observes
    /// right now), lease file second (what DHCP handed out).
    pub fn from_config(config: &Config) -> Self {
        Self::new(vec![
            Box::new(NeighborLookup::from_config(config)),
            Box::new(LeaseLookup::from_config(config)),
        ])
    }

    /// Resolve `ip` to a MAC.
    ///
    /// A present `claimed` value (forwarded by a trusted upstream device,
    /// e.g. the router's injected header) short-circuits the chain: it is
    /// normalized and returned without any cross-check against the live
    /// tables. That makes it spoofable by whoever can set the header --
    /// deploy it only behind an upstream that strips the header from
    /// client traffic. A malformed claim is rejected, not ignored.
    ///
    /// `Ok(None)` means no strategy produced a MAC; callers decide
    /// whether to deny or degrade.
    pub async fn resolve(
        &self,
        ip: &str,
        claimed: Option<&str>,
    ) -> Result<Option<MacAddress>, AccessError> {
        if let Some(raw) = claimed {
            let mac: MacAddress = raw.parse()?;
            debug!("using claimed MAC {} for {}", mac, ip);
            return Ok(Some(mac));
        }

        for strategy in &self.strategies {
            match strategy.try_resolve(ip).await {
                Ok(Some(mac)) => {
                    debug!("resolved {} to {} via {}", ip, mac, strategy.name());
                    return Ok(Some(mac));
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("{} lookup failed for {}: {:#}", strategy.name(), ip, e);
                }
            }
        }

        warn!("could not determine MAC address for {}", ip);
        Ok(None)
    }
}
