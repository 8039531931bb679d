//! HTTP client for the Pushbullet v2 REST API.
//!
//! Handles access-token authentication, JSON bodies, query parameters, and
//! request/response lifecycle. Each call is exactly one request: no retry,
//! no caching, no shared state between calls.

use std::time::Duration;

use reqwest::{Client, Method};
use serde::Serialize;
use tracing::debug;

use pb_core::config::PushbulletConfig;
use pb_core::constants;
use pb_core::error::{PbError, PbResult};

use crate::response::ApiResponse;

/// HTTP client for communicating with the Pushbullet API.
///
/// Wraps `reqwest::Client` with access-token injection and response
/// normalization. Cloning is cheap and clones may be used concurrently.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// Versioned API root (e.g. "https://api.pushbullet.com/v2").
    api_root: String,
    /// Access token sent on every request.
    access_token: String,
    /// Request timeout.
    timeout: Duration,
}

impl ApiClient {
    /// Create a new ApiClient from Pushbullet configuration.
    ///
    /// Fails with [`PbError::MissingConfig`] when no access token is
    /// configured; no operation can run in that state and no network
    /// request is ever attempted.
    pub fn new(config: &PushbulletConfig) -> PbResult<Self> {
        if !config.is_configured() {
            return Err(PbError::MissingConfig(
                "pushbullet.access_token".to_string(),
            ));
        }

        let timeout = Duration::from_millis(config.api_timeout_ms);
        let inner = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PbError::Http(format!("failed to build HTTP client: {e}")))?;

        let api_root = format!(
            "{}/{}",
            config.api_base.trim_end_matches('/'),
            constants::API_VERSION
        );

        Ok(Self {
            inner,
            api_root,
            access_token: config.access_token.trim().to_string(),
            timeout,
        })
    }

    /// Get the versioned API root URL.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Internal: issue one request and normalize the outcome.
    async fn request<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&serde_json::Value>,
    ) -> PbResult<ApiResponse> {
        let url = self.url(path);
        debug!("{} {}", method, path);

        let mut builder = self
            .inner
            .request(method, &url)
            .timeout(self.timeout)
            .header("Access-Token", &self.access_token);
        if let Some(q) = query {
            builder = builder.query(q);
        }
        // Content-Type: application/json is set only when a body is present.
        if let Some(b) = body {
            builder = builder.json(b);
        }

        let response = builder.send().await.map_err(Self::classify_error)?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| PbError::Http(format!("failed to read response body: {e}")))?;

        // Non-JSON or empty bodies are not an error here; callers that need
        // a body get UnexpectedResponse from ApiResponse::into_body.
        let body = serde_json::from_str(&text).ok();
        Ok(ApiResponse::new(status, body))
    }

    /// Classify a reqwest error into a PbError variant.
    fn classify_error(e: reqwest::Error) -> PbError {
        if e.is_timeout() {
            PbError::Timeout(e.to_string())
        } else if e.is_connect() {
            PbError::Http(format!("connection failed: {e}"))
        } else {
            PbError::Http(e.to_string())
        }
    }

    // --- Public HTTP methods ---

    /// Execute a GET request.
    pub async fn get(&self, path: &str) -> PbResult<ApiResponse> {
        self.request::<()>(Method::GET, path, None, None).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> PbResult<ApiResponse> {
        self.request(Method::GET, path, Some(query), None).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &serde_json::Value) -> PbResult<ApiResponse> {
        self.request::<()>(Method::POST, path, None, Some(body))
            .await
    }

    /// Execute a DELETE request.
    pub async fn delete(&self, path: &str) -> PbResult<ApiResponse> {
        self.request::<()>(Method::DELETE, path, None, None).await
    }
}
