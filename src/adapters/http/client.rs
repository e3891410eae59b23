//! ApiClient - shared reqwest client for the coaching backend.
//!
//! Attaches the coach's bearer token, logs every request and response at debug
//! level, and maps failures onto [`GatewayError`]:
//!
//! | Condition | Error |
//! |-----------|-------|
//! | client-side timeout | `Timeout` |
//! | 502 / 504 | `Gateway` |
//! | 401 | `Unauthorized` (session invalidated when the token itself was rejected) |
//! | 404 | `NotFound` |
//! | other non-2xx | `Api` |

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::ports::{AccessTokenProvider, GatewayError};

/// Substrings of a 401 detail that mean the token itself is no longer usable.
const TOKEN_REJECTION_MARKERS: &[&str] = &["expired", "invalid", "credentials", "signature"];

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Backend root, without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiClientConfig {
    /// Creates a configuration with the default 30 second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// Authenticated JSON client for the backend API.
pub struct ApiClient {
    config: ApiClientConfig,
    client: Client,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl ApiClient {
    /// Builds the underlying HTTP client.
    pub fn new(
        config: ApiClientConfig,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `GET path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let request = self.request(Method::GET, path).await;
        let response = self.send(request, Method::GET, path).await?;
        Self::decode(response).await
    }

    /// `POST path` with a JSON body and decode the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).await.json(body);
        let response = self.send(request, Method::POST, path).await?;
        Self::decode(response).await
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let builder = self
            .client
            .request(method, url)
            .header("Content-Type", "application/json");

        match self.tokens.access_token().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(
        &self,
        request: RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<Response, GatewayError> {
        tracing::debug!(%method, path, "request");

        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "request failed");
            if e.is_timeout() {
                GatewayError::timeout(self.config.timeout.as_secs())
            } else if e.is_connect() {
                GatewayError::network(format!("connection failed: {}", e))
            } else {
                GatewayError::network(e.to_string())
            }
        })?;

        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(%method, path, status = status.as_u16(), body = %body, "response error");
        Err(self.map_status(status, &body).await)
    }

    async fn map_status(&self, status: StatusCode, body: &str) -> GatewayError {
        let detail = error_detail(body);
        match status {
            StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT => {
                GatewayError::gateway(status.as_u16())
            }
            StatusCode::UNAUTHORIZED => {
                if is_token_rejection(&detail) {
                    tracing::warn!(detail = %detail, "access token rejected, signing out");
                    self.tokens.invalidate().await;
                }
                GatewayError::unauthorized(detail)
            }
            StatusCode::NOT_FOUND => GatewayError::not_found(detail),
            _ => GatewayError::api(status.as_u16(), detail),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::parse(e.to_string()))
    }
}

/// Extracts the `detail` string from an error body, falling back to the raw body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

fn is_token_rejection(detail: &str) -> bool {
    let detail = detail.to_lowercase();
    TOKEN_REJECTION_MARKERS.iter().any(|m| detail.contains(m))
}
