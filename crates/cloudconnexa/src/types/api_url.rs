//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::Error;
use crate::version::ApiVersion;

/// A validated CloudConnexa API base URL.
///
/// This type ensures the URL is absolute, uses HTTP or HTTPS, and is
/// normalized so endpoint construction always produces exactly one
/// separator at each join.
///
/// # Example
///
/// ```
/// use cloudconnexa::{ApiUrl, ApiVersion};
///
/// let api = ApiUrl::new("https://myorg.api.openvpn.com/").unwrap();
/// assert_eq!(api.token_url(), "https://myorg.api.openvpn.com/oauth2/token");
/// assert_eq!(
///     api.endpoint(ApiVersion::V1_1_0, "/networks/"),
///     "https://myorg.api.openvpn.com/api/v1.1.0/networks"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the URL is empty, relative, or
    /// uses a scheme other than HTTP/HTTPS.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        if s.trim().is_empty() {
            return Err(Error::Configuration("API URL is required".into()));
        }

        let url = Url::parse(s)
            .map_err(|e| Error::Configuration(format!("invalid API URL '{s}': {e}")))?;

        if url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "invalid API URL '{s}': must be an absolute URL"
            )));
        }
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Configuration(format!(
                "invalid API URL '{s}': scheme must be http or https"
            )));
        }

        Ok(Self(url))
    }

    /// Returns the unversioned OAuth2 token endpoint URL.
    pub fn token_url(&self) -> String {
        format!("{}/oauth2/token", self.base())
    }

    /// Returns the full URL for a versioned API endpoint.
    ///
    /// Leading and trailing slashes on `path` are normalized so the result
    /// contains exactly one separator at each join.
    pub fn endpoint(&self, version: ApiVersion, path: &str) -> String {
        format!("{}/api/v{}/{}", self.base(), version, path.trim_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    // The url crate keeps a trailing slash on root paths; strip it so
    // joins never double up.
    fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base())
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ApiUrl {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ApiUrl> for String {
    fn from(url: ApiUrl) -> Self {
        url.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_url() {
        let api = ApiUrl::new("https://example.api.openvpn.com").unwrap();
        assert_eq!(api.token_url(), "https://example.api.openvpn.com/oauth2/token");
    }

    #[test]
    fn rejects_empty_url() {
        let err = ApiUrl::new("").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(ApiUrl::new("ftp://example.com").is_err());
        assert!(ApiUrl::new("not a url").is_err());
    }

    #[test]
    fn endpoint_normalizes_slashes() {
        let api = ApiUrl::new("https://example.com/").unwrap();
        assert_eq!(
            api.endpoint(ApiVersion::V1_0, "/networks"),
            "https://example.com/api/v1.0/networks"
        );
        assert_eq!(
            api.endpoint(ApiVersion::V1_0, "networks/abc/"),
            "https://example.com/api/v1.0/networks/abc"
        );
    }
}
