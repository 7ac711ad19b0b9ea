//! Access control orchestration.
//!
//! [`AccessController`] ties resolution, the user store and the whitelist
//! gate together and is the only place that mutates network access. Per
//! device the legal transitions are unknown -> granted (`grant_access`)
//! and granted -> revoked (`revoke_access`); a revoked device needs a
//! fresh explicit grant. The controller never retries on its own; retry
//! policy, if any, belongs to the caller.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AccessError;
use crate::mac::MacAddress;
use crate::resolver::MacResolver;
use crate::whitelist::WhitelistGate;

#[cfg(test)]
use mockall::automock;

/// Collaborator seam to the external user store.
///
/// The store keeps its own user records; the controller only notifies it
/// of the MAC a user registered from. Failures here are logged and never
/// block the grant path.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Record that `user_id` registered from `mac`.
    async fn associate_mac(&self, user_id: &str, mac: &MacAddress) -> Result<()>;
}

/// A successful grant: the resolved MAC now has egress from `ip`.
#[derive(Debug, Clone)]
pub struct AccessGrant {
    pub mac: MacAddress,
    pub ip: String,
}

/// Read-only access probe for a client.
#[derive(Debug, Clone)]
pub struct AccessStatus {
    /// The resolved MAC, if any strategy produced one.
    pub mac: Option<MacAddress>,
    /// Whether that MAC is currently whitelisted.
    pub whitelisted: bool,
}

/// Orchestrates MAC resolution and whitelist mutation.
pub struct AccessController {
    resolver: MacResolver,
    gate: WhitelistGate,
    users: Option<Arc<dyn UserStore>>,
}

impl AccessController {
    pub fn new(
        resolver: MacResolver,
        gate: WhitelistGate,
        users: Option<Arc<dyn UserStore>>,
    ) -> Self {
        Self {
            resolver,
            gate,
            users,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            MacResolver::from_config(config),
            WhitelistGate::from_config(config),
            None,
        )
    }

    /// Grant network access to the device behind `ip`.
    ///
    /// Resolution failure surfaces as [`AccessError::MacResolution`]; the
    /// caller decides whether registration proceeds without network
    /// access. The user-store notification is best-effort and happens
    /// before the whitelist add; a failed add fails the whole operation,
    /// so success is never reported unless the external authority
    /// confirmed the mutation.
    pub async fn grant_access(
        &self,
        ip: &str,
        claimed: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<AccessGrant, AccessError> {
        let mac = self
            .resolver
            .resolve(ip, claimed)
            .await?
            .ok_or_else(|| AccessError::MacResolution { ip: ip.to_string() })?;

        if let (Some(store), Some(user)) = (&self.users, user_id) {
            if let Err(e) = store.associate_mac(user, &mac).await {
                warn!("failed to record MAC {} for user {}: {:#}", mac, user, e);
            }
        }

        self.gate.add(&mac).await?;

        info!("network access granted to {} ({})", mac, ip);
        Ok(AccessGrant {
            mac,
            ip: ip.to_string(),
        })
    }

    /// Revoke network access for a MAC. Idempotent: revoking an address
    /// that was never granted is a success.
    pub async fn revoke_access(&self, mac: &MacAddress) -> Result<(), AccessError> {
        self.gate.remove(mac).await?;
        info!("network access revoked for {}", mac);
        Ok(())
    }

    /// Read-only status: what MAC does this client resolve to, and is it
    /// currently whitelisted?
    pub async fn access_status(
        &self,
        ip: &str,
        claimed: Option<&str>,
    ) -> Result<AccessStatus, AccessError> {
        match self.resolver.resolve(ip, claimed).await? {
            Some(mac) => {
                let whitelisted = self.gate.is_member(&mac).await;
                Ok(AccessStatus {
                    mac: Some(mac),
                    whitelisted,
                })
            }
            None => Ok(AccessStatus {
                mac: None,
                whitelisted: false,
            }),
        }
    }
}
