//! macgate - MAC-based network access control for captive portal gateways.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use macgate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Grant {
            ip,
            user,
            claimed_mac,
        } => {
            macgate::commands::grant::run(&ip, user.as_deref(), claimed_mac.as_deref(), &cli.config)
                .await
        }
        Commands::Revoke { mac } => macgate::commands::revoke::run(&mac, &cli.config).await,
        Commands::Status { ip, claimed_mac } => {
            macgate::commands::status::run(&ip, claimed_mac.as_deref(), &cli.config).await
        }
        Commands::Resolve { ip, claimed_mac } => {
            macgate::commands::resolve::run(&ip, claimed_mac.as_deref(), &cli.config).await
        }
        Commands::Whitelist { action } => {
            macgate::commands::whitelist::run(action, &cli.config).await
        }
        Commands::Leases => macgate::commands::leases::run(&cli.config).await,
        Commands::Neighbors => macgate::commands::neighbors::run(&cli.config).await,
        Commands::Version => {
            println!("macgate {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
