//! Leases command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::leases::BindingState;
use crate::resolver::LeaseLookup;

/// Run the leases command
pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let lookup = LeaseLookup::from_config(&config);

    let records = lookup.records()?;

    println!();
    println!("DHCP leases ({} records, file order):", records.len());
    println!();
    if records.is_empty() {
        println!("  (none)");
    } else {
        for record in &records {
            let state = match record.binding_state {
                BindingState::Active => "active",
                BindingState::Other => "inactive",
            };
            println!("  {:<16} {}  [{}]", record.ip, record.mac, state);
        }
    }
    println!();

    Ok(())
}
