//! Revoke command implementation.

use anyhow::Result;
use std::path::Path;

use crate::access::AccessController;
use crate::config::Config;
use crate::mac::MacAddress;
use crate::whitelist::check_root;

/// Run the revoke command
pub async fn run(mac_str: &str, config_path: &Path) -> Result<()> {
    check_root()?;

    let mac: MacAddress = mac_str.parse()?;

    let config = Config::load(config_path)?;
    let controller = AccessController::from_config(&config);

    controller.revoke_access(&mac).await?;

    println!("[OK] Network access revoked for {}", mac);
    Ok(())
}
