//! Error types for the cloudconnexa library.
//!
//! This module provides a unified error type with explicit variants for
//! configuration, authentication, validation, and API failures, so callers
//! can handle specific cases without string matching.

use thiserror::Error;

/// The unified error type for cloudconnexa operations.
///
/// Every failure mode in the library surfaces as one of these variants.
/// There is no silent-failure path: the request layer turns every
/// non-success response into an error, and only
/// [`CloudConnexaClient::authenticate`](crate::CloudConnexaClient::authenticate)
/// collapses errors into a boolean.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid setup, detected before any network activity.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Token acquisition failed. Refresh failures never surface here;
    /// they fall back to full acquisition internally.
    #[error("authentication failed: {message}")]
    Authentication {
        /// Human-readable description of the failure.
        message: String,
        /// HTTP status code of the token response, if one was received.
        status: Option<u16>,
        /// Raw response body, kept for diagnostics.
        body: Option<String>,
        /// Underlying transport error, if the request never completed.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The server rejected the request as malformed (HTTP 400), or the
    /// library rejected it client-side before sending.
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable description of the failure.
        message: String,
        /// Structured `error.details` from the response body, if present.
        details: Option<serde_json::Value>,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("resource '{resource_id}' not found")]
    NotFound {
        /// Identifier of the missing resource (the trailing path segment
        /// unless the caller knows better).
        resource_id: String,
        /// Raw response body, kept for diagnostics.
        body: Option<String>,
    },

    /// The API rate limit was exceeded (HTTP 429).
    #[error("rate limit exceeded")]
    RateLimit {
        /// Seconds to wait before retrying, from the error body's
        /// `retry_after` field or the `Retry-After` header.
        retry_after: Option<u64>,
    },

    /// Catch-all for other API failures, including transport errors.
    #[error("API request failed: {message}")]
    Api {
        /// Human-readable description of the failure.
        message: String,
        /// HTTP status code, if a response was received.
        status: Option<u16>,
        /// Raw response body, kept for diagnostics.
        body: Option<String>,
        /// Underlying transport error, if the request never completed.
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl Error {
    /// Returns the HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Configuration(_) => None,
            Error::Authentication { status, .. } => *status,
            Error::Validation { .. } => Some(400),
            Error::NotFound { .. } => Some(404),
            Error::RateLimit { .. } => Some(429),
            Error::Api { status, .. } => *status,
        }
    }
}

// Transport failures during a dispatched request wrap into the catch-all
// API variant, carrying the original cause.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api {
            message: format!("API request failed: {err}"),
            status: err.status().map(|s| s.as_u16()),
            body: None,
            source: Some(err),
        }
    }
}
