//! HTTP transport for the StudyBuddy backend API
//!
//! This module owns the reqwest client setup, bearer-credential injection,
//! and the mapping from HTTP responses to the crate error taxonomy.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::auth::TokenStore;
use crate::config::ApiConfig;
use crate::utils::errors::{Result, StudyBuddyError};

/// Fallback message when the server supplied no usable error body
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong while processing your request.";

/// Error body shape returned by the backend
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, String>>,
}

/// Shared HTTP transport over the backend REST surface
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpTransport {
    /// Create a new transport from API configuration
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(StudyBuddyError::Network)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Absolute URL for an API path, e.g. `/sessions/42`
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Build an unauthenticated request
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Build a request carrying the bearer credential.
    ///
    /// Fails with `Unauthenticated` before any network activity when no
    /// credential is stored.
    pub fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self
            .tokens
            .get_token()
            .ok_or(StudyBuddyError::Unauthenticated)?;

        Ok(self.request(method, path).bearer_auth(token))
    }

    /// Send a request and deserialize a JSON response body
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(StudyBuddyError::Network)?;
        Self::parse_json(response).await
    }

    /// Send a request, tolerating an empty success body
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await.map_err(StudyBuddyError::Network)?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::error_for(status, &body))
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "API request rejected");
            return Err(Self::error_for(status, &body));
        }

        let bytes = response.bytes().await.map_err(StudyBuddyError::Network)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            debug!(error = %e, "Unparseable success body");
            StudyBuddyError::Server {
                status: status.as_u16(),
                message: GENERIC_ERROR_MESSAGE.to_string(),
            }
        })
    }

    /// Map a non-2xx response to the error taxonomy
    fn error_for(status: StatusCode, body: &str) -> StudyBuddyError {
        let parsed: Option<ApiErrorBody> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|b| b.message.clone())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        match status {
            StatusCode::NOT_FOUND => StudyBuddyError::NotFound(message),
            StatusCode::UNAUTHORIZED => StudyBuddyError::Unauthenticated,
            StatusCode::FORBIDDEN => StudyBuddyError::PermissionDenied(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                if let Some(fields) = parsed.and_then(|b| b.errors) {
                    if !fields.is_empty() {
                        return StudyBuddyError::Validation(fields.into());
                    }
                }
                StudyBuddyError::Server {
                    status: status.as_u16(),
                    message,
                }
            }
            _ => StudyBuddyError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
