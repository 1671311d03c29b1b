//! OAuth2 token acquisition and lifecycle.

use chrono::Utc;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::error::Error;
use crate::types::ApiUrl;

use super::credentials::Credentials;
use super::token::AccessToken;

/// Wire shape of a successful token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Guarantees the request layer always has a live bearer token, minimizing
/// redundant token-endpoint calls.
///
/// The token lives behind an `RwLock`; the lock is never held across a
/// network call, so concurrent [`ensure_authenticated`] calls may race and
/// issue duplicate acquisitions. That is an accepted trade-off, not a
/// guaranteed-exclusive critical section.
///
/// [`ensure_authenticated`]: Authenticator::ensure_authenticated
pub struct Authenticator {
    http: reqwest::Client,
    token_url: String,
    credentials: Credentials,
    token: RwLock<Option<AccessToken>>,
}

impl Authenticator {
    /// Create an authenticator for the token endpoint of `api_url`.
    pub(crate) fn new(http: reqwest::Client, api_url: &ApiUrl, credentials: Credentials) -> Self {
        Self {
            http,
            token_url: api_url.token_url(),
            credentials,
            token: RwLock::new(None),
        }
    }

    /// Ensure a valid token is on hand, acquiring or refreshing as needed.
    ///
    /// If the current token is still valid this returns immediately with
    /// zero network calls. A stale token triggers one best-effort refresh;
    /// refresh failures of any kind are logged and swallowed, falling back
    /// to full acquisition. Acquisition failures propagate as
    /// [`Error::Authentication`].
    #[instrument(skip(self))]
    pub async fn ensure_authenticated(&self) -> Result<(), Error> {
        let stale = {
            let guard = self.token.read().await;
            match guard.as_ref() {
                Some(token) if token.is_valid() => return Ok(()),
                Some(token) => Some(token.secret().to_string()),
                None => None,
            }
        };

        if let Some(refresh_token) = stale {
            debug!("token stale, attempting refresh");
            if let Some(token) = self.try_refresh(&refresh_token).await {
                *self.token.write().await = Some(token);
                return Ok(());
            }
        }

        let token = self.acquire().await?;
        *self.token.write().await = Some(token);
        Ok(())
    }

    /// Returns the current bearer token string, if one is held.
    ///
    /// Never triggers network activity; the token may already be stale.
    pub async fn token(&self) -> Option<String> {
        let guard = self.token.read().await;
        guard.as_ref().map(|t| t.secret().to_string())
    }

    /// Full acquisition via the client-credentials grant.
    #[instrument(skip(self))]
    async fn acquire(&self) -> Result<AccessToken, Error> {
        debug!(token_url = %self.token_url, "acquiring access token");

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id()),
            ("client_secret", self.credentials.client_secret()),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Authentication {
                message: format!("token request failed: {e}"),
                status: None,
                body: None,
                source: Some(e),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("token request rejected with status {status}"),
                status: Some(status.as_u16()),
                body: Some(body),
                source: None,
            });
        }

        let token: TokenResponse =
            response.json().await.map_err(|e| Error::Authentication {
                message: format!("malformed token response: {e}"),
                status: Some(status.as_u16()),
                body: None,
                source: Some(e),
            })?;

        debug!(expires_in = token.expires_in, "access token acquired");
        Ok(AccessToken::new(token.access_token, Utc::now(), token.expires_in))
    }

    /// Best-effort refresh of a stale token.
    ///
    /// Refresh is an optimization, not a required path: any failure is
    /// logged and answered with `None` so the caller falls back to full
    /// acquisition instead of surfacing the error.
    #[instrument(skip(self, refresh_token))]
    async fn try_refresh(&self, refresh_token: &str) -> Option<AccessToken> {
        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", self.credentials.client_id()),
            ("client_secret", self.credentials.client_secret()),
            ("refresh_token", refresh_token),
        ];

        let response = match self.http.post(&self.token_url).form(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "token refresh failed, falling back to full acquisition");
                return None;
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(%status, "token refresh rejected, falling back to full acquisition");
            return None;
        }

        match response.json::<TokenResponse>().await {
            Ok(token) => {
                debug!(expires_in = token.expires_in, "access token refreshed");
                Some(AccessToken::new(token.access_token, Utc::now(), token.expires_in))
            }
            Err(e) => {
                warn!(error = %e, "malformed refresh response, falling back to full acquisition");
                None
            }
        }
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("token_url", &self.token_url)
            .field("credentials", &self.credentials)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
