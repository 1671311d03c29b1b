//! Bearer token type with expiry tracking.

use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Safety buffer subtracted from the expiry instant, guarding against the
/// token expiring between the validity check and its use on the wire.
const EXPIRY_MARGIN_SECS: i64 = 30;

/// A bearer token for authenticated API requests, paired with the instant
/// it expires.
///
/// Owned exclusively by the [`Authenticator`](super::Authenticator); it is
/// replaced wholesale on successful acquisition or refresh and exposed to
/// callers only as a read-only string.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct AccessToken {
    secret: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Create a token expiring `expires_in` seconds after `issued_at`.
    pub(crate) fn new(secret: impl Into<String>, issued_at: DateTime<Utc>, expires_in: u64) -> Self {
        Self {
            secret: secret.into(),
            expires_at: issued_at + TimeDelta::seconds(expires_in as i64),
        }
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers or refresh
    /// requests.
    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    /// Returns the instant this token expires.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true if the token is still valid at `now`.
    ///
    /// A token counts as valid only while `now < expires_at - 30s`.
    pub(crate) fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at - TimeDelta::seconds(EXPIRY_MARGIN_SECS)
    }

    /// Returns true if the token is still valid right now.
    pub(crate) fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_valid() {
        let now = Utc::now();
        let token = AccessToken::new("tok", now, 3600);
        assert!(token.is_valid_at(now));
    }

    #[test]
    fn token_invalid_inside_expiry_margin() {
        let now = Utc::now();
        // Expires in 20s: inside the 30s safety buffer, so already stale.
        let token = AccessToken::new("tok", now, 20);
        assert!(!token.is_valid_at(now));
    }

    #[test]
    fn token_invalid_after_expiry() {
        let now = Utc::now();
        let token = AccessToken::new("tok", now, 3600);
        assert!(!token.is_valid_at(now + TimeDelta::seconds(3600)));
        assert!(!token.is_valid_at(now + TimeDelta::seconds(3571)));
        assert!(token.is_valid_at(now + TimeDelta::seconds(3569)));
    }

    #[test]
    fn token_hides_value_in_debug() {
        let token = AccessToken::new("super-secret-token", Utc::now(), 3600);
        let debug = format!("{:?}", token);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
