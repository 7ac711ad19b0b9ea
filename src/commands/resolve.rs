//! Resolve command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::resolver::MacResolver;

/// Run the resolve command
pub async fn run(ip: &str, claimed_mac: Option<&str>, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let resolver = MacResolver::from_config(&config);

    match resolver.resolve(ip, claimed_mac).await? {
        Some(mac) => {
            println!("{}", mac);
            Ok(())
        }
        None => anyhow::bail!("No MAC address found for {}", ip),
    }
}
