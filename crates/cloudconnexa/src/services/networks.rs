//! Network resource service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::RestClient;
use crate::page::Page;
use crate::types::Timestamp;

/// A CloudConnexa network.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Network {
    /// Unique network identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Internet access configuration, e.g. `split_tunnel_on`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egress: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpn_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_servers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connectors: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Request body for creating a network.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NetworkCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_access: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_region: Option<String>,
}

/// Request body for updating a network; unset fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NetworkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_access: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_region: Option<String>,
}

/// Service for managing networks.
#[derive(Clone, Debug)]
pub struct NetworkService {
    rest: RestClient,
}

impl NetworkService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List networks as a normalized page.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Page<Network>, Error> {
        debug!("listing networks");
        let value: Value = self.rest.get("networks").await?;
        Ok(Page::from_value(value))
    }

    /// Get a network by ID.
    #[instrument(skip(self))]
    pub async fn get(&self, network_id: &str) -> Result<Network, Error> {
        self.rest.get(&format!("networks/{network_id}")).await
    }

    /// Create a new network.
    ///
    /// The name is validated client-side before any request is sent.
    #[instrument(skip(self, network), fields(name = %network.name))]
    pub async fn create(&self, network: &NetworkCreate) -> Result<Network, Error> {
        if network.name.is_empty() {
            return Err(Error::Validation {
                message: "validation failed".to_string(),
                details: Some(serde_json::json!({"name": ["Name cannot be empty"]})),
            });
        }
        self.rest.post("networks", network).await
    }

    /// Update a network.
    #[instrument(skip(self, update))]
    pub async fn update(&self, network_id: &str, update: &NetworkUpdate) -> Result<Network, Error> {
        self.rest
            .patch(&format!("networks/{network_id}"), update)
            .await
    }

    /// Delete a network.
    #[instrument(skip(self))]
    pub async fn delete(&self, network_id: &str) -> Result<(), Error> {
        self.rest.delete(&format!("networks/{network_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_tolerates_sparse_payloads() {
        let network: Network =
            serde_json::from_value(serde_json::json!({"id": "net-1", "name": "office"})).unwrap();
        assert_eq!(network.id, "net-1");
        assert!(network.created_at.is_none());
    }

    #[test]
    fn network_timestamps_parse_leniently() {
        let network: Network = serde_json::from_value(serde_json::json!({
            "id": "net-1",
            "name": "office",
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "soon"
        }))
        .unwrap();
        assert!(network.created_at.unwrap().as_datetime().is_some());
        assert_eq!(network.updated_at.unwrap(), Timestamp::Raw("soon".into()));
    }

    #[test]
    fn create_body_omits_unset_fields() {
        let body = serde_json::to_value(NetworkCreate {
            name: "office".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"name": "office"}));
    }
}
