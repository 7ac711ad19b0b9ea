//! Status command implementation.

use anyhow::Result;
use std::path::Path;

use crate::access::AccessController;
use crate::config::Config;

/// Run the status command
pub async fn run(ip: &str, claimed_mac: Option<&str>, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let controller = AccessController::from_config(&config);

    let status = controller.access_status(ip, claimed_mac).await?;

    println!();
    println!("Client IP: {}", ip);
    match &status.mac {
        Some(mac) => {
            println!("MAC:       {}", mac);
            println!(
                "Access:    {}",
                if status.whitelisted {
                    "GRANTED"
                } else {
                    "NOT GRANTED"
                }
            );
        }
        None => {
            println!("MAC:       not detected");
            println!("Access:    NOT GRANTED");
        }
    }
    println!();

    Ok(())
}
