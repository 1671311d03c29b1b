//! Per-resource API services.
//!
//! Each service is a thin caller of the request layer sharing one
//! contract: `list` returns a normalized [`Page`](crate::Page), `get`
//! and `create` return the resource, `delete` succeeds on 204, and every
//! failure surfaces as a typed [`Error`](crate::Error).

mod dns;
mod ip_services;
mod networks;
mod user_groups;
mod users;

pub use dns::{DnsRecord, DnsRecordWrite, DnsService};
pub use ip_services::{IpService, IpServiceService, IpServiceWrite};
pub use networks::{Network, NetworkCreate, NetworkService, NetworkUpdate};
pub use user_groups::{UserGroup, UserGroupService, UserGroupWrite};
pub use users::{User, UserCreate, UserService, UserUpdate};
