//! User group subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cloudconnexa::CloudConnexaClient;

use crate::output;

#[derive(Args, Debug)]
pub struct UserGroupsCommand {
    #[command(subcommand)]
    pub command: UserGroupsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserGroupsSubcommand {
    /// List user groups
    List(ListArgs),

    /// Fetch a single user group (requires API v1.1.0)
    Get(GetArgs),

    /// Add a user to a group
    AddUser(MembershipArgs),

    /// Remove a user from a group
    RemoveUser(MembershipArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// User group ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct MembershipArgs {
    /// User group ID
    pub group_id: String,

    /// User ID
    pub user_id: String,
}

pub async fn run(client: &CloudConnexaClient, cmd: UserGroupsCommand) -> Result<()> {
    match cmd.command {
        UserGroupsSubcommand::List(args) => {
            let page = client
                .user_groups()
                .list()
                .await
                .context("Failed to list user groups")?;
            output::page(&page, args.pretty)
        }
        UserGroupsSubcommand::Get(args) => {
            let group = client
                .user_groups()
                .get(&args.id)
                .await
                .context("Failed to get user group")?;
            output::json_pretty(&group)
        }
        UserGroupsSubcommand::AddUser(args) => {
            client
                .user_groups()
                .add_user(&args.group_id, &args.user_id)
                .await
                .context("Failed to add user to group")?;
            output::success(&format!(
                "Added user {} to group {}",
                args.user_id, args.group_id
            ));
            Ok(())
        }
        UserGroupsSubcommand::RemoveUser(args) => {
            client
                .user_groups()
                .remove_user(&args.group_id, &args.user_id)
                .await
                .context("Failed to remove user from group")?;
            output::success(&format!(
                "Removed user {} from group {}",
                args.user_id, args.group_id
            ));
            Ok(())
        }
    }
}
