//! Neighbors command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::resolver::NeighborLookup;

/// Run the neighbors command
pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let lookup = NeighborLookup::from_config(&config);

    let entries = lookup.table().await?;

    println!();
    println!("Neighbor table ({} entries):", entries.len());
    println!();
    if entries.is_empty() {
        println!("  (empty)");
    } else {
        for entry in &entries {
            println!("  {:<16} {}  on {}", entry.ip, entry.mac, entry.interface);
        }
    }
    println!();

    Ok(())
}
