//! IP service resource service.
//!
//! IP services are scoped to a network; every operation takes the owning
//! network's ID.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::error::Error;
use crate::http::RestClient;
use crate::page::Page;
use crate::types::Timestamp;

/// An IP service exposed through a network.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IpService {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Service type, e.g. `IP_SOURCE` or `SERVICE_DESTINATION`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    /// Routing configuration; optional on API 1.1.0 and later, see
    /// [`Feature::IpServiceWithoutRouting`](crate::Feature::IpServiceWithoutRouting).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Request body for creating or updating an IP service.
#[derive(Clone, Debug, Default, Serialize)]
pub struct IpServiceWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

/// Service for managing IP services.
#[derive(Clone, Debug)]
pub struct IpServiceService {
    rest: RestClient,
}

impl IpServiceService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn base(network_id: &str) -> String {
        format!("networks/{network_id}/ip-services")
    }

    /// List a network's IP services as a normalized page.
    #[instrument(skip(self))]
    pub async fn list(&self, network_id: &str) -> Result<Page<IpService>, Error> {
        let value: Value = self.rest.get(&Self::base(network_id)).await?;
        Ok(Page::from_value(value))
    }

    /// Get a single IP service.
    #[instrument(skip(self))]
    pub async fn get(&self, network_id: &str, service_id: &str) -> Result<IpService, Error> {
        self.rest
            .get(&format!("{}/{service_id}", Self::base(network_id)))
            .await
    }

    /// Create an IP service in a network.
    #[instrument(skip(self, service))]
    pub async fn create(&self, network_id: &str, service: &IpServiceWrite) -> Result<IpService, Error> {
        self.rest.post(&Self::base(network_id), service).await
    }

    /// Update an IP service.
    #[instrument(skip(self, update))]
    pub async fn update(
        &self,
        network_id: &str,
        service_id: &str,
        update: &IpServiceWrite,
    ) -> Result<IpService, Error> {
        self.rest
            .patch(&format!("{}/{service_id}", Self::base(network_id)), update)
            .await
    }

    /// Delete an IP service.
    #[instrument(skip(self))]
    pub async fn delete(&self, network_id: &str, service_id: &str) -> Result<(), Error> {
        self.rest
            .delete(&format!("{}/{service_id}", Self::base(network_id)))
            .await
    }
}
