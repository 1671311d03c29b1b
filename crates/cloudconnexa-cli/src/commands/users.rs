//! User subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cloudconnexa::CloudConnexaClient;
use cloudconnexa::services::UserCreate;

use crate::output;

#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// List users
    List(ListArgs),

    /// Fetch a single user
    Get(GetArgs),

    /// Invite a new user
    Create(CreateArgs),

    /// Delete a user
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
    /// User ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Email address
    #[arg(long)]
    pub email: String,

    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Role
    #[arg(long)]
    pub role: Option<String>,

    /// User group ID
    #[arg(long)]
    pub group_id: Option<String>,
}

pub async fn run(client: &CloudConnexaClient, cmd: UsersCommand) -> Result<()> {
    match cmd.command {
        UsersSubcommand::List(args) => {
            let page = client.users().list().await.context("Failed to list users")?;
            output::page(&page, args.pretty)
        }
        UsersSubcommand::Get(args) => {
            let user = client
                .users()
                .get(&args.id)
                .await
                .context("Failed to get user")?;
            output::json_pretty(&user)
        }
        UsersSubcommand::Create(args) => {
            let create = UserCreate {
                email: args.email,
                first_name: args.first_name,
                last_name: args.last_name,
                role: args.role,
                group_id: args.group_id,
            };
            let user = client
                .users()
                .create(&create)
                .await
                .context("Failed to create user")?;
            output::success(&format!("Created user {}", user.id));
            output::json_pretty(&user)
        }
        UsersSubcommand::Delete(args) => {
            client
                .users()
                .delete(&args.id)
                .await
                .context("Failed to delete user")?;
            output::success(&format!("Deleted user {}", args.id));
            Ok(())
        }
    }
}
