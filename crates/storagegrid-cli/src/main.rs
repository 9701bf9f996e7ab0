//! sgctl - command-line reports for a StorageGRID grid or tenant account.
//!
//! Connection settings come from `STORAGEGRID_*` environment variables,
//! optionally loaded from a `.env` file.

mod commands;
mod config;
mod format;

use std::io;

use anyhow::Result;
use storagegrid_core::{GridClient, TenantClient};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::Command;
use config::Config;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=storagegrid_core=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    if command == Command::Help {
        println!("{}", commands::USAGE);
        return Ok(());
    }

    let config = Config::from_env()?;
    debug!(endpoint = %config.endpoint, ?command, "Running command");
    let client = config.client(command.is_tenant())?;

    let report = if command.is_tenant() {
        run_tenant(&TenantClient::new(client), &command).await?
    } else {
        run_grid(&GridClient::new(client), &command).await?
    };
    print!("{}", report);

    info!("sgctl finished");
    Ok(())
}

async fn run_grid(grid: &GridClient, command: &Command) -> Result<String> {
    match command {
        Command::Health => commands::health_report(grid.health()).await,
        Command::Tenants => commands::tenants_report(grid.tenants()).await,
        Command::TenantUsage(id) => commands::tenant_usage_report(grid.tenants(), id).await,
        Command::Regions => commands::regions_report(grid.regions()).await,
        other => anyhow::bail!("{:?} is not a grid command", other),
    }
}

async fn run_tenant(tenant: &TenantClient, command: &Command) -> Result<String> {
    match command {
        Command::Buckets => commands::buckets_report(tenant.buckets()).await,
        Command::BucketUsage(name) => commands::bucket_usage_report(tenant.buckets(), name).await,
        Command::Users => commands::users_report(tenant.users()).await,
        Command::Groups => commands::groups_report(tenant.groups()).await,
        other => anyhow::bail!("{:?} is not a tenant command", other),
    }
}
