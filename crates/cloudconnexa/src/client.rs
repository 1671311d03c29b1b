//! The CloudConnexa client facade.

use std::sync::{Arc, OnceLock};

use tracing::{info, instrument, warn};

use crate::auth::{Authenticator, Credentials};
use crate::error::Error;
use crate::http::RestClient;
use crate::services::{DnsService, IpServiceService, NetworkService, UserGroupService, UserService};
use crate::types::ApiUrl;
use crate::version::{self, ApiVersion};

/// Main client for the CloudConnexa API.
///
/// The client owns authentication and request dispatch, and hands out
/// per-resource services. Services are constructed lazily on first access
/// and cached for the lifetime of the client, so each client holds at most
/// one instance per resource.
///
/// Cheap to clone (internal `Arc`) and safe to share across tasks; note
/// that concurrent calls may race on token acquisition, which is accepted.
///
/// # Example
///
/// ```no_run
/// use cloudconnexa::{CloudConnexaClient, Credentials};
///
/// # async fn example() -> Result<(), cloudconnexa::Error> {
/// let credentials = Credentials::new("client-id", "client-secret");
/// let client = CloudConnexaClient::connect("https://myorg.api.openvpn.com", credentials).await?;
///
/// let networks = client.networks().list().await?;
/// for network in &networks.data {
///     println!("{}: {}", network.id, network.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CloudConnexaClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    rest: RestClient,
    auth: Arc<Authenticator>,
    api_url: ApiUrl,
    version: ApiVersion,
    networks: OnceLock<NetworkService>,
    users: OnceLock<UserService>,
    user_groups: OnceLock<UserGroupService>,
    dns: OnceLock<DnsService>,
    ip_services: OnceLock<IpServiceService>,
}

impl CloudConnexaClient {
    /// Create a client pinned to an explicit API version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the URL is invalid or the
    /// credentials are incomplete. No network activity happens here.
    pub fn new(
        api_url: impl AsRef<str>,
        credentials: Credentials,
        version: ApiVersion,
    ) -> Result<Self, Error> {
        let api_url = ApiUrl::new(api_url)?;
        if !credentials.is_complete() {
            return Err(Error::Configuration(
                "Client ID and Client Secret are required".to_string(),
            ));
        }

        let http = build_transport();
        Ok(Self::assemble(http, api_url, credentials, version))
    }

    /// Create a client, probing the server for the newest API version.
    ///
    /// Prefers v1.1.0 when the server answers its version probe, falling
    /// back to v1.0 otherwise. Use [`new`](Self::new) to pin a version and
    /// skip the probe.
    #[instrument(skip(credentials))]
    pub async fn connect(
        api_url: impl AsRef<str> + std::fmt::Debug,
        credentials: Credentials,
    ) -> Result<Self, Error> {
        let api_url = ApiUrl::new(api_url)?;
        if !credentials.is_complete() {
            return Err(Error::Configuration(
                "Client ID and Client Secret are required".to_string(),
            ));
        }

        let http = build_transport();
        let version = version::detect(&http, &api_url).await;
        info!(%version, "using API version");
        Ok(Self::assemble(http, api_url, credentials, version))
    }

    fn assemble(
        http: reqwest::Client,
        api_url: ApiUrl,
        credentials: Credentials,
        version: ApiVersion,
    ) -> Self {
        let auth = Arc::new(Authenticator::new(http.clone(), &api_url, credentials));
        let rest = RestClient::new(http, api_url.clone(), version, auth.clone());
        Self {
            inner: Arc::new(ClientInner {
                rest,
                auth,
                api_url,
                version,
                networks: OnceLock::new(),
                users: OnceLock::new(),
                user_groups: OnceLock::new(),
                dns: OnceLock::new(),
                ip_services: OnceLock::new(),
            }),
        }
    }

    /// Acquire a token now, reporting success as a boolean.
    ///
    /// This is the one place errors are swallowed: it exists for callers
    /// that only want a yes/no answer up front. Everything else in the
    /// library propagates the typed error.
    pub async fn authenticate(&self) -> bool {
        match self.inner.auth.ensure_authenticated().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "authentication failed");
                false
            }
        }
    }

    /// Returns the current bearer token, if one has been acquired.
    ///
    /// Never triggers network activity.
    pub async fn token(&self) -> Option<String> {
        self.inner.auth.token().await
    }

    /// Returns the API version in use.
    pub fn api_version(&self) -> ApiVersion {
        self.inner.version
    }

    /// Returns the configured API base URL.
    pub fn api_url(&self) -> &ApiUrl {
        &self.inner.api_url
    }

    /// Network service.
    pub fn networks(&self) -> &NetworkService {
        self.inner
            .networks
            .get_or_init(|| NetworkService::new(self.inner.rest.clone()))
    }

    /// User service.
    pub fn users(&self) -> &UserService {
        self.inner
            .users
            .get_or_init(|| UserService::new(self.inner.rest.clone()))
    }

    /// User group service.
    pub fn user_groups(&self) -> &UserGroupService {
        self.inner
            .user_groups
            .get_or_init(|| UserGroupService::new(self.inner.rest.clone()))
    }

    /// DNS record service.
    pub fn dns(&self) -> &DnsService {
        self.inner
            .dns
            .get_or_init(|| DnsService::new(self.inner.rest.clone()))
    }

    /// IP service management.
    pub fn ip_services(&self) -> &IpServiceService {
        self.inner
            .ip_services
            .get_or_init(|| IpServiceService::new(self.inner.rest.clone()))
    }
}

fn build_transport() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("cloudconnexa/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client")
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for CloudConnexaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudConnexaClient")
            .field("api_url", &self.inner.api_url)
            .field("version", &self.inner.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_incomplete_credentials() {
        let err = CloudConnexaClient::new(
            "https://example.com",
            Credentials::new("", "secret"),
            ApiVersion::V1_0,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn rejects_empty_api_url() {
        let err = CloudConnexaClient::new(
            "",
            Credentials::new("id", "secret"),
            ApiVersion::V1_0,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn service_accessors_return_cached_instances() {
        let client = CloudConnexaClient::new(
            "https://example.com",
            Credentials::new("id", "secret"),
            ApiVersion::V1_1_0,
        )
        .unwrap();
        assert!(std::ptr::eq(client.networks(), client.networks()));
    }
}
