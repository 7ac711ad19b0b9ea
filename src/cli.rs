//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "macgate")]
#[command(author, version, about = "MAC-based network access control for captive portal gateways")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "/etc/macgate/config.yaml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Grant network access to the device behind an IP
    Grant {
        /// Client IP address
        ip: String,

        /// User id to associate the resolved MAC with
        #[arg(long)]
        user: Option<String>,

        /// MAC claimed by a trusted upstream device (skips table lookups)
        #[arg(long)]
        claimed_mac: Option<String>,
    },

    /// Revoke network access for a MAC
    Revoke {
        /// MAC address to remove from the whitelist
        mac: String,
    },

    /// Show resolved MAC and whitelist membership for an IP
    Status {
        /// Client IP address
        ip: String,

        /// MAC claimed by a trusted upstream device
        #[arg(long)]
        claimed_mac: Option<String>,
    },

    /// Resolve an IP to a MAC without touching the whitelist
    Resolve {
        /// Client IP address
        ip: String,

        /// MAC claimed by a trusted upstream device
        #[arg(long)]
        claimed_mac: Option<String>,
    },

    /// Manage the firewall whitelist directly
    Whitelist {
        #[command(subcommand)]
        action: WhitelistAction,
    },

    /// Show current DHCP leases
    Leases,

    /// Show the live neighbor (ARP) table
    Neighbors,

    /// Show version
    Version,
}

#[derive(Subcommand)]
pub enum WhitelistAction {
    /// Add a MAC to the whitelist
    Add {
        /// MAC address to add
        mac: String,
    },
    /// Remove a MAC from the whitelist
    Del {
        /// MAC address to remove
        mac: String,
    },
    /// List all whitelisted MACs
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_grant() {
        let cli = Cli::try_parse_from([
            "macgate",
            "grant",
            "192.168.1.50",
            "--user",
            "42",
            "--claimed-mac",
            "aa:bb:cc:dd:ee:ff",
        ])
        .unwrap();
        match cli.command {
            Commands::Grant {
                ip,
                user,
                claimed_mac,
            } => {
                assert_eq!(ip, "192.168.1.50");
                assert_eq!(user.as_deref(), Some("42"));
                assert_eq!(claimed_mac.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
            }
            _ => panic!("expected grant"),
        }
    }

    #[test]
    fn test_cli_default_config_path() {
        let cli = Cli::try_parse_from(["macgate", "neighbors"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/macgate/config.yaml"));
    }

    #[test]
    fn test_cli_parses_whitelist_actions() {
        let cli =
            Cli::try_parse_from(["macgate", "whitelist", "del", "aa:bb:cc:dd:ee:ff"]).unwrap();
        match cli.command {
            Commands::Whitelist {
                action: WhitelistAction::Del { mac },
            } => assert_eq!(mac, "aa:bb:cc:dd:ee:ff"),
            _ => panic!("expected whitelist del"),
        }
    }

    #[test]
    fn test_cli_rejects_missing_ip() {
        assert!(Cli::try_parse_from(["macgate", "grant"]).is_err());
    }
}
