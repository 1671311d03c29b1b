//! API version handling and detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::Error;
use crate::types::ApiUrl;

/// A supported CloudConnexa API version.
///
/// Only `1.0` and `1.1.0` exist; any other version string is rejected
/// before the client is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ApiVersion {
    /// API version 1.0.
    V1_0,
    /// API version 1.1.0.
    V1_1_0,
}

/// An API capability whose availability depends on the version in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    /// Fetching a single DNS record by ID.
    DnsSingleRecord,
    /// Fetching a single user group by ID.
    UserGroupSingle,
    /// Creating IP services without routing configuration.
    IpServiceWithoutRouting,
    /// Listing DNS records.
    DnsList,
    /// Listing user groups.
    UserGroupList,
    /// Listing IP services.
    IpServiceList,
}

impl ApiVersion {
    /// Returns true if this version supports the given feature.
    pub fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::DnsSingleRecord
            | Feature::UserGroupSingle
            | Feature::IpServiceWithoutRouting => *self == ApiVersion::V1_1_0,
            Feature::DnsList | Feature::UserGroupList | Feature::IpServiceList => true,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1_0 => write!(f, "1.0"),
            ApiVersion::V1_1_0 => write!(f, "1.1.0"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.0" => Ok(ApiVersion::V1_0),
            "1.1.0" => Ok(ApiVersion::V1_1_0),
            other => Err(Error::Configuration(format!(
                "unsupported API version '{other}' (expected \"1.0\" or \"1.1.0\")"
            ))),
        }
    }
}

impl TryFrom<String> for ApiVersion {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ApiVersion> for String {
    fn from(version: ApiVersion) -> Self {
        version.to_string()
    }
}

/// Probe the server for the newest supported API version.
///
/// Tries `GET /api/v1.1.0/version` unauthenticated; a 200 means v1.1.0 is
/// available, anything else (including transport failures) falls back to
/// v1.0.
pub(crate) async fn detect(http: &reqwest::Client, api_url: &ApiUrl) -> ApiVersion {
    let probe = api_url.endpoint(ApiVersion::V1_1_0, "version");
    match http.get(&probe).send().await {
        Ok(response) if response.status() == reqwest::StatusCode::OK => {
            info!("detected API version 1.1.0");
            ApiVersion::V1_1_0
        }
        Ok(response) => {
            debug!(status = %response.status(), "v1.1.0 probe rejected");
            info!("falling back to API version 1.0");
            ApiVersion::V1_0
        }
        Err(e) => {
            debug!(error = %e, "v1.1.0 probe failed");
            info!("falling back to API version 1.0");
            ApiVersion::V1_0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_versions() {
        assert_eq!("1.0".parse::<ApiVersion>().unwrap(), ApiVersion::V1_0);
        assert_eq!("1.1.0".parse::<ApiVersion>().unwrap(), ApiVersion::V1_1_0);
    }

    #[test]
    fn rejects_unknown_versions() {
        for bad in ["1.1", "2.0", "v1.0", ""] {
            let err = bad.parse::<ApiVersion>().unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn display_round_trips() {
        for version in [ApiVersion::V1_0, ApiVersion::V1_1_0] {
            assert_eq!(version.to_string().parse::<ApiVersion>().unwrap(), version);
        }
    }

    #[test]
    fn feature_matrix() {
        assert!(!ApiVersion::V1_0.supports(Feature::DnsSingleRecord));
        assert!(!ApiVersion::V1_0.supports(Feature::UserGroupSingle));
        assert!(!ApiVersion::V1_0.supports(Feature::IpServiceWithoutRouting));
        assert!(ApiVersion::V1_0.supports(Feature::DnsList));
        assert!(ApiVersion::V1_1_0.supports(Feature::DnsSingleRecord));
        assert!(ApiVersion::V1_1_0.supports(Feature::IpServiceList));
    }
}
