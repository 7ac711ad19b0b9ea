//! Grant command implementation.

use anyhow::Result;
use std::path::Path;

use crate::access::AccessController;
use crate::config::Config;
use crate::error::AccessError;
use crate::whitelist::check_root;

/// Run the grant command
pub async fn run(
    ip: &str,
    user: Option<&str>,
    claimed_mac: Option<&str>,
    config_path: &Path,
) -> Result<()> {
    check_root()?;

    let config = Config::load(config_path)?;
    let controller = AccessController::from_config(&config);

    match controller.grant_access(ip, claimed_mac, user).await {
        Ok(grant) => {
            println!("[OK] Network access granted");
            println!("     IP:  {}", grant.ip);
            println!("     MAC: {}", grant.mac);
            Ok(())
        }
        Err(AccessError::MacResolution { ip }) => {
            // The device stays registered; only the network gate is denied.
            // Callers embedding this flow may choose to degrade instead.
            anyhow::bail!(
                "Could not determine a MAC address for {} -- no access granted.\n\
                 The device may retry once it appears in the neighbor table or lease file.",
                ip
            )
        }
        Err(e) => Err(e.into()),
    }
}
