//! CLI argument definitions.

use clap::{Parser, Subcommand};
use cloudconnexa::ApiVersion;

use crate::commands::{
    dns::DnsCommand, ip_services::IpServicesCommand, networks::NetworksCommand,
    user_groups::UserGroupsCommand, users::UsersCommand,
};

/// CloudConnexa CLI tool.
#[derive(Parser, Debug)]
#[command(name = "cloudconnexa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CloudConnexa API base URL
    #[arg(long, env = "CLOUDCONNEXA_API_URL", global = true, default_value = "")]
    pub api_url: String,

    /// OAuth2 client ID
    #[arg(long, env = "CLOUDCONNEXA_CLIENT_ID", global = true, default_value = "")]
    pub client_id: String,

    /// OAuth2 client secret
    #[arg(long, env = "CLOUDCONNEXA_CLIENT_SECRET", global = true, default_value = "")]
    pub client_secret: String,

    /// API version to use ("1.0" or "1.1.0"); detected when omitted
    #[arg(long, env = "CLOUDCONNEXA_API_VERSION", global = true)]
    pub api_version: Option<ApiVersion>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Network operations
    Networks(NetworksCommand),

    /// User operations
    Users(UsersCommand),

    /// User group operations
    UserGroups(UserGroupsCommand),

    /// DNS record operations (scoped to a network)
    Dns(DnsCommand),

    /// IP service operations (scoped to a network)
    IpServices(IpServicesCommand),
}
