//! Subcommand implementations, one module per resource.

pub mod dns;
pub mod ip_services;
pub mod networks;
pub mod user_groups;
pub mod users;
