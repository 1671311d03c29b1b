//! User resource service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::RestClient;
use crate::page::Page;
use crate::types::Timestamp;

/// A CloudConnexa user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Request body for creating a user.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserCreate {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Request body for updating a user; unset fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Service for managing users.
#[derive(Clone, Debug)]
pub struct UserService {
    rest: RestClient,
}

impl UserService {
    pub(crate) fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List users as a normalized page.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Page<User>, Error> {
        debug!("listing users");
        let value: Value = self.rest.get("users").await?;
        Ok(Page::from_value(value))
    }

    /// Get a user by ID.
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: &str) -> Result<User, Error> {
        self.rest.get(&format!("users/{user_id}")).await
    }

    /// Create a new user.
    ///
    /// The email is validated client-side before any request is sent.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create(&self, user: &UserCreate) -> Result<User, Error> {
        if user.email.is_empty() {
            return Err(Error::Validation {
                message: "email cannot be empty".to_string(),
                details: None,
            });
        }
        self.rest.post("users", user).await
    }

    /// Update a user.
    #[instrument(skip(self, update))]
    pub async fn update(&self, user_id: &str, update: &UserUpdate) -> Result<User, Error> {
        self.rest.patch(&format!("users/{user_id}"), update).await
    }

    /// Delete a user.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: &str) -> Result<(), Error> {
        self.rest.delete(&format!("users/{user_id}")).await
    }
}
