//! DNS record subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cloudconnexa::CloudConnexaClient;

use crate::output;

#[derive(Args, Debug)]
pub struct DnsCommand {
    /// Owning network ID
    #[arg(long)]
    pub network_id: String,

    #[command(subcommand)]
    pub command: DnsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DnsSubcommand {
    /// List DNS records
    List(ListArgs),

    /// Fetch a single DNS record (requires API v1.1.0)
    Get(GetArgs),

    /// Delete a DNS record
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
    /// DNS record ID
    pub id: String,
}

pub async fn run(client: &CloudConnexaClient, cmd: DnsCommand) -> Result<()> {
    let network_id = &cmd.network_id;
    match cmd.command {
        DnsSubcommand::List(args) => {
            let page = client
                .dns()
                .list(network_id)
                .await
                .context("Failed to list DNS records")?;
            output::page(&page, args.pretty)
        }
        DnsSubcommand::Get(args) => {
            let record = client
                .dns()
                .get(network_id, &args.id)
                .await
                .context("Failed to get DNS record")?;
            output::json_pretty(&record)
        }
        DnsSubcommand::Delete(args) => {
            client
                .dns()
                .delete(network_id, &args.id)
                .await
                .context("Failed to delete DNS record")?;
            output::success(&format!("Deleted DNS record {}", args.id));
            Ok(())
        }
    }
}
