//! IP service subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cloudconnexa::CloudConnexaClient;

use crate::output;

#[derive(Args, Debug)]
pub struct IpServicesCommand {
    /// Owning network ID
    #[arg(long)]
    pub network_id: String,

    #[command(subcommand)]
    pub command: IpServicesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IpServicesSubcommand {
    /// List IP services
    List(ListArgs),

    /// Fetch a single IP service
    Get(GetArgs),

    /// Delete an IP service
    Delete(GetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// IP service ID
    pub id: String,
}

pub async fn run(client: &CloudConnexaClient, cmd: IpServicesCommand) -> Result<()> {
    let network_id = &cmd.network_id;
    match cmd.command {
        IpServicesSubcommand::List(args) => {
            let page = client
                .ip_services()
                .list(network_id)
                .await
                .context("Failed to list IP services")?;
            output::page(&page, args.pretty)
        }
        IpServicesSubcommand::Get(args) => {
            let service = client
                .ip_services()
                .get(network_id, &args.id)
                .await
                .context("Failed to get IP service")?;
            output::json_pretty(&service)
        }
        IpServicesSubcommand::Delete(args) => {
            client
                .ip_services()
                .delete(network_id, &args.id)
                .await
                .context("Failed to delete IP service")?;
            output::success(&format!("Deleted IP service {}", args.id));
            Ok(())
        }
    }
}
