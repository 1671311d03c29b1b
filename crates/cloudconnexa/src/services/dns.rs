//! DNS record resource service.
//!
//! DNS records are scoped to a network; every operation takes the owning
//! network's ID.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::error::Error;
use crate::http::RestClient;
use crate::page::Page;
use crate::types::Timestamp;

/// A DNS record belonging to a network.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    /// Record type: A, AAAA, CNAME, etc.
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Request body for creating or updating a DNS record.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DnsRecordWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Service for managing DNS records.
#[derive(Clone, Debug)]
pub struct DnsService {
    rest: RestClient,
}

impl DnsService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn base(network_id: &str) -> String {
        format!("networks/{network_id}/dns-records")
    }

    /// List a network's DNS records as a normalized page.
    #[instrument(skip(self))]
    pub async fn list(&self, network_id: &str) -> Result<Page<DnsRecord>, Error> {
        let value: Value = self.rest.get(&Self::base(network_id)).await?;
        Ok(Page::from_value(value))
    }

    /// Get a single DNS record.
    ///
    /// Single-record reads require API version 1.1.0; see
    /// [`Feature::DnsSingleRecord`](crate::Feature::DnsSingleRecord).
    #[instrument(skip(self))]
    pub async fn get(&self, network_id: &str, record_id: &str) -> Result<DnsRecord, Error> {
        self.rest
            .get(&format!("{}/{record_id}", Self::base(network_id)))
            .await
    }

    /// Create a DNS record in a network.
    #[instrument(skip(self, record))]
    pub async fn create(&self, network_id: &str, record: &DnsRecordWrite) -> Result<DnsRecord, Error> {
        self.rest.post(&Self::base(network_id), record).await
    }

    /// Update a DNS record.
    #[instrument(skip(self, update))]
    pub async fn update(
        &self,
        network_id: &str,
        record_id: &str,
        update: &DnsRecordWrite,
    ) -> Result<DnsRecord, Error> {
        self.rest
            .patch(&format!("{}/{record_id}", Self::base(network_id)), update)
            .await
    }

    /// Delete a DNS record.
    #[instrument(skip(self))]
    pub async fn delete(&self, network_id: &str, record_id: &str) -> Result<(), Error> {
        self.rest
            .delete(&format!("{}/{record_id}", Self::base(network_id)))
            .await
    }
}
