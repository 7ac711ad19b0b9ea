//! # macgate - MAC-based Network Access Control
//!
//! Network access control for captive portal gateways: figure out which
//! physical device (MAC address) is behind a client IP, and gate that
//! device's egress by adding it to or removing it from an external
//! firewall whitelist.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        macgate                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                                 │
//! │    └── Commands: grant, revoke, status, whitelist, ...      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  AccessController                                           │
//! │    └── grant/revoke orchestration, user-store notification  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MacResolver (ResolveStrategy chain)                        │
//! │    ├── explicit claim from a trusted upstream device        │
//! │    ├── NeighborLookup (live ARP table)                      │
//! │    └── LeaseLookup (DHCP lease file, last active wins)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  WhitelistGate (external whitelist tool)                    │
//! │    └── add / remove / list, never cached                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whitelist authority is the single source of truth: it can be
//! edited outside this process, so membership is re-read on every query
//! and no in-memory copy is kept. All external touches (subprocesses,
//! the lease file) are timeout-bounded and mockable for tests.
//!
//! A MAC address is not an identity -- it can be spoofed. What macgate
//! guarantees is a best-effort, auditable mapping from "currently
//! observed source address" to "device permitted egress".
//!
//! ## Example Usage
//!
//! ```no_run
//! use macgate::access::AccessController;
//! use macgate::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("/etc/macgate/config.yaml")?;
//!     let controller = AccessController::from_config(&config);
//!
//!     // Resolve the client's MAC and whitelist it.
//!     let grant = controller.grant_access("192.168.1.50", None, Some("user-42")).await?;
//!     println!("granted: {}", grant.mac);
//!
//!     // Later: take it back out.
//!     controller.revoke_access(&grant.mac).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`access`] - Grant/revoke orchestration and the user-store seam
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration parsing and validation
//! - [`error`] - Error kinds, attributed to the failing collaborator
//! - [`leases`] - ISC-style DHCP lease file parsing
//! - [`mac`] - Validated, normalized MAC address value type
//! - [`neighbors`] - Neighbor (ARP) table parsing
//! - [`resolver`] - IP-to-MAC resolution strategy chain
//! - [`whitelist`] - Gate over the external firewall whitelist tool

pub mod access;
pub mod cli;
pub mod cmd_abstraction;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs_abstraction;
pub mod leases;
pub mod mac;
pub mod neighbors;
pub mod resolver;
pub mod whitelist;

pub use access::{AccessController, AccessGrant, AccessStatus};
pub use config::Config;
pub use error::{AccessError, Collaborator};
pub use mac::MacAddress;
