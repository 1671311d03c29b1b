//! cloudconnexa - CLI tool for the CloudConnexa VPN management API.
//!
//! This is a thin wrapper over the `cloudconnexa` library, intended for
//! manual exploration and scripting against a CloudConnexa tenant.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cloudconnexa::{CloudConnexaClient, Credentials};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let client = build_client(&cli).await?;

    match cli.command {
        Commands::Networks(cmd) => commands::networks::run(&client, cmd).await,
        Commands::Users(cmd) => commands::users::run(&client, cmd).await,
        Commands::UserGroups(cmd) => commands::user_groups::run(&client, cmd).await,
        Commands::Dns(cmd) => commands::dns::run(&client, cmd).await,
        Commands::IpServices(cmd) => commands::ip_services::run(&client, cmd).await,
    }
}

async fn build_client(cli: &Cli) -> Result<CloudConnexaClient> {
    let credentials = Credentials::new(&cli.client_id, &cli.client_secret);

    let client = match cli.api_version {
        Some(version) => CloudConnexaClient::new(&cli.api_url, credentials, version)
            .context("Failed to configure client")?,
        None => CloudConnexaClient::connect(&cli.api_url, credentials)
            .await
            .context("Failed to configure client")?,
    };

    tracing::info!(version = %client.api_version(), "using API version");
    Ok(client)
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
