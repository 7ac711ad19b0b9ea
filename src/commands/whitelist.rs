//! Whitelist command implementation.

use anyhow::Result;
use std::path::Path;

use crate::cli::WhitelistAction;
use crate::config::Config;
use crate::mac::MacAddress;
use crate::whitelist::{check_root, WhitelistGate};

/// Run the whitelist command
pub async fn run(action: WhitelistAction, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let gate = WhitelistGate::from_config(&config);

    match action {
        WhitelistAction::Add { mac } => {
            check_root()?;
            let mac: MacAddress = mac.parse()?;
            gate.add(&mac).await?;
            println!("[OK] Added {} to whitelist", mac);
        }
        WhitelistAction::Del { mac } => {
            check_root()?;
            let mac: MacAddress = mac.parse()?;
            gate.remove(&mac).await?;
            println!("[OK] Removed {} from whitelist", mac);
        }
        WhitelistAction::List => {
            let members = gate.list().await;
            println!();
            println!("Whitelisted MAC addresses ({} entries):", members.len());
            println!();
            if members.is_empty() {
                println!("  (empty)");
            } else {
                for mac in &members {
                    println!("  {}", mac);
                }
            }
            println!();
        }
    }

    Ok(())
}
