//! User group resource service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::error::Error;
use crate::http::RestClient;
use crate::page::Page;
use crate::types::Timestamp;

/// A CloudConnexa user group.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_access: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpn_regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_device: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Request body for creating or updating a user group.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserGroupWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_access: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_regions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_device: Option<u32>,
}

/// Service for managing user groups, including group membership.
#[derive(Clone, Debug)]
pub struct UserGroupService {
    rest: RestClient,
}

impl UserGroupService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List user groups as a normalized page.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Page<UserGroup>, Error> {
        let value: Value = self.rest.get("user-groups").await?;
        Ok(Page::from_value(value))
    }

    /// Get a user group by ID.
    ///
    /// Single-group reads require API version 1.1.0; see
    /// [`Feature::UserGroupSingle`](crate::Feature::UserGroupSingle).
    #[instrument(skip(self))]
    pub async fn get(&self, group_id: &str) -> Result<UserGroup, Error> {
        self.rest.get(&format!("user-groups/{group_id}")).await
    }

    /// Create a new user group.
    #[instrument(skip(self, group))]
    pub async fn create(&self, group: &UserGroupWrite) -> Result<UserGroup, Error> {
        self.rest.post("user-groups", group).await
    }

    /// Update a user group.
    #[instrument(skip(self, update))]
    pub async fn update(&self, group_id: &str, update: &UserGroupWrite) -> Result<UserGroup, Error> {
        self.rest
            .patch(&format!("user-groups/{group_id}"), update)
            .await
    }

    /// Delete a user group.
    #[instrument(skip(self))]
    pub async fn delete(&self, group_id: &str) -> Result<(), Error> {
        self.rest.delete(&format!("user-groups/{group_id}")).await
    }

    /// Add a user to a group.
    #[instrument(skip(self))]
    pub async fn add_user(&self, group_id: &str, user_id: &str) -> Result<(), Error> {
        let _: Value = self
            .rest
            .post(
                &format!("user-groups/{group_id}/users/{user_id}"),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }

    /// Remove a user from a group.
    #[instrument(skip(self))]
    pub async fn remove_user(&self, group_id: &str, user_id: &str) -> Result<(), Error> {
        self.rest
            .delete(&format!("user-groups/{group_id}/users/{user_id}"))
            .await
    }
}
