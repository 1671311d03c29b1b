//! Network subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cloudconnexa::CloudConnexaClient;
use cloudconnexa::services::NetworkCreate;

use crate::output;

#[derive(Args, Debug)]
pub struct NetworksCommand {
    #[command(subcommand)]
    pub command: NetworksSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NetworksSubcommand {
    /// List networks
    List(ListArgs),

    /// Fetch a single network
    Get(GetArgs),

    /// Create a new network
    Create(CreateArgs),

    /// Delete a network
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Network ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Network name
    #[arg(long)]
    pub name: String,

    /// Network description
    #[arg(long)]
    pub description: Option<String>,

    /// VPN region
    #[arg(long)]
    pub vpn_region: Option<String>,

    /// Enable egress
    #[arg(long)]
    pub egress: Option<bool>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Network ID
    pub id: String,
}

pub async fn run(client: &CloudConnexaClient, cmd: NetworksCommand) -> Result<()> {
    match cmd.command {
        NetworksSubcommand::List(args) => {
            let page = client
                .networks()
                .list()
                .await
                .context("Failed to list networks")?;
            output::page(&page, args.pretty)
        }
        NetworksSubcommand::Get(args) => {
            let network = client
                .networks()
                .get(&args.id)
                .await
                .context("Failed to get network")?;
            output::json_pretty(&network)
        }
        NetworksSubcommand::Create(args) => {
            let create = NetworkCreate {
                name: args.name,
                description: args.description,
                vpn_region: args.vpn_region,
                egress: args.egress,
                ..Default::default()
            };
            let network = client
                .networks()
                .create(&create)
                .await
                .context("Failed to create network")?;
            output::success(&format!("Created network {}", network.id));
            output::json_pretty(&network)
        }
        NetworksSubcommand::Delete(args) => {
            client
                .networks()
                .delete(&args.id)
                .await
                .context("Failed to delete network")?;
            output::success(&format!("Deleted network {}", args.id));
            Ok(())
        }
    }
}
