//! cloudconnexa - Client library for the CloudConnexa VPN management API
//!
//! This library provides authenticated access to CloudConnexa resources
//! (networks, users, user groups, DNS records, IP services) across API
//! versions 1.0 and 1.1.0. Authentication uses the OAuth2
//! client-credentials grant with automatic token refresh; heterogeneous
//! list responses are normalized into a uniform [`Page`] envelope, and
//! failures surface as a typed [`Error`] taxonomy.
//!
//! # Example
//!
//! ```no_run
//! use cloudconnexa::{CloudConnexaClient, Credentials};
//!
//! # async fn example() -> Result<(), cloudconnexa::Error> {
//! let credentials = Credentials::new("client-id", "client-secret");
//! let client = CloudConnexaClient::connect("https://myorg.api.openvpn.com", credentials).await?;
//!
//! let page = client.networks().list().await?;
//! println!("{} of {} networks", page.data.len(), page.pagination.total);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod page;
pub mod services;
pub mod types;
pub mod version;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::CloudConnexaClient;
pub use error::Error;
pub use page::{Page, Pagination};
pub use types::{ApiUrl, Timestamp};
pub use version::{ApiVersion, Feature};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
