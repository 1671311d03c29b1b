//! Authenticated request dispatch.
//!
//! Every outbound API call goes through [`RestClient`]: it ensures a live
//! token, injects the authentication headers, joins the versioned URL, and
//! classifies the response into a payload or a typed error.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::auth::Authenticator;
use crate::error::Error;
use crate::types::ApiUrl;
use crate::version::ApiVersion;

/// The single choke point for outbound API requests.
///
/// Cheap to clone; the underlying transport and authenticator are shared.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    api_url: ApiUrl,
    version: ApiVersion,
    auth: Arc<Authenticator>,
}

impl RestClient {
    pub(crate) fn new(
        http: reqwest::Client,
        api_url: ApiUrl,
        version: ApiVersion,
        auth: Arc<Authenticator>,
    ) -> Self {
        Self {
            http,
            api_url,
            version,
            auth,
        }
    }

    /// Returns the API version requests are dispatched against.
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// GET a resource and deserialize the response body.
    #[instrument(skip(self), fields(version = %self.version))]
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        let url = self.api_url.endpoint(self.version, path);
        debug!(%url, "GET");
        let value = self.execute(self.http.get(&url), path).await?;
        Self::decode(value)
    }

    /// POST a JSON body and deserialize the response body.
    #[instrument(skip(self, body), fields(version = %self.version))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api_url.endpoint(self.version, path);
        debug!(%url, "POST");
        let value = self.execute(self.http.post(&url).json(body), path).await?;
        Self::decode(value)
    }

    /// PATCH a JSON body and deserialize the response body.
    #[instrument(skip(self, body), fields(version = %self.version))]
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api_url.endpoint(self.version, path);
        debug!(%url, "PATCH");
        let value = self.execute(self.http.patch(&url).json(body), path).await?;
        Self::decode(value)
    }

    /// DELETE a resource, expecting no response body.
    #[instrument(skip(self), fields(version = %self.version))]
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.api_url.endpoint(self.version, path);
        debug!(%url, "DELETE");
        self.execute(self.http.delete(&url), path).await?;
        Ok(())
    }

    /// Authenticate, send, and classify.
    ///
    /// An authentication failure propagates unmodified; no request is
    /// attempted without a token.
    async fn execute(
        &self,
        builder: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<Value, Error> {
        self.auth.ensure_authenticated().await?;

        let token = self.auth.token().await.ok_or_else(|| Error::Authentication {
            message: "no token available after authentication".to_string(),
            status: None,
            body: None,
            source: None,
        })?;

        // Applied last so a caller-supplied Authorization header can never
        // silently win over the bearer token.
        let response = builder.headers(Self::request_headers(&token)).send().await?;

        self.classify(response, path).await
    }

    fn request_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {token}");
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Classify a response into a payload or a typed error.
    ///
    /// The order matters: 429 and 404 are themselves >= 400, so they must
    /// be checked before the generic fallback.
    async fn classify(&self, response: reqwest::Response, path: &str) -> Result<Value, Error> {
        let status = response.status();
        trace!(%status, "API response");

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let retry_after_header = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let text = response.text().await?;
        let body: Option<Value> = if text.is_empty() {
            None
        } else {
            serde_json::from_str(&text).ok()
        };

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                // The JSON error body takes precedence over the header.
                let retry_after = body
                    .as_ref()
                    .and_then(|b| b.pointer("/error/retry_after"))
                    .and_then(Value::as_u64)
                    .or(retry_after_header);
                Err(Error::RateLimit { retry_after })
            }
            StatusCode::NOT_FOUND => Err(Error::NotFound {
                resource_id: trailing_segment(path),
                body: Some(text),
            }),
            StatusCode::BAD_REQUEST => {
                let message = body
                    .as_ref()
                    .and_then(|b| b.pointer("/error/message"))
                    .and_then(Value::as_str)
                    .unwrap_or("validation failed")
                    .to_string();
                let details = body
                    .as_ref()
                    .and_then(|b| b.pointer("/error/details"))
                    .cloned();
                Err(Error::Validation { message, details })
            }
            s if s.as_u16() >= 400 => {
                let message = body
                    .as_ref()
                    .and_then(|b| b.pointer("/error/message"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        format!("API request failed with status {}: {text}", s.as_u16())
                    });
                Err(Error::Api {
                    message,
                    status: Some(s.as_u16()),
                    body: Some(text),
                    source: None,
                })
            }
            _ => match body {
                Some(value) => Ok(value),
                None if text.is_empty() => Ok(Value::Object(serde_json::Map::new())),
                None => Err(Error::Api {
                    message: "response body is not valid JSON".to_string(),
                    status: Some(status.as_u16()),
                    body: Some(text),
                    source: None,
                }),
            },
        }
    }

    fn decode<R: DeserializeOwned>(value: Value) -> Result<R, Error> {
        serde_json::from_value(value).map_err(|e| Error::Api {
            message: format!("unexpected response shape: {e}"),
            status: None,
            body: None,
            source: None,
        })
    }
}

/// The trailing segment of a request path, used as the default resource
/// identifier for 404 classification.
fn trailing_segment(path: &str) -> String {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
        .to_string()
}
