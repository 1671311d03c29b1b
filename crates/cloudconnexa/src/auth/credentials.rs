//! OAuth2 client credentials type.

use std::fmt;

/// Client credentials for the OAuth2 client-credentials grant.
///
/// This type holds the client ID and client secret issued for API access.
/// No user interaction is involved in this flow.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use cloudconnexa::Credentials;
///
/// let creds = Credentials::new("my-client-id", "my-client-secret");
/// assert_eq!(creds.client_id(), "my-client-id");
/// ```
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Returns the client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret.
    ///
    /// # Security
    ///
    /// Use this only when constructing token requests.
    /// Never log or display this value.
    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns true if both the ID and secret are non-empty.
    pub(crate) fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

// Intentionally hide the secret in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

// Clone is intentionally implemented to allow credentials to be reused,
// but the type is not Copy to make credential passing explicit.
impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }
}
