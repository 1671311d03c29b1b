//! Authentication types and token lifecycle.
//!
//! This module provides the OAuth2 client-credentials primitives. The
//! request layer asks the [`Authenticator`] for a live token before every
//! outbound call.

mod authenticator;
mod credentials;
mod token;

pub use authenticator::Authenticator;
pub use credentials::Credentials;
pub use token::AccessToken;
