//! HTTP transport for the dashboard backend.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::ApiError;
use super::types::{ApiMethod, ApiRequest, ApiResponse};
use crate::config::DashboardConfig;

/// Sends [`ApiRequest`]s to the backend.
///
/// Implementations return `Ok` for every HTTP response, whatever its status;
/// `Err` is reserved for failures where no response arrived. Callers use
/// [`ApiResponse::error_for_status`] to classify the status.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>> + Send;
}

impl<T: Transport + Sync> Transport for &T {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>> + Send {
        (**self).send(request)
    }
}

/// `reqwest`-backed [`Transport`] for the dashboard backend.
#[derive(Clone)]
pub struct ApiClient {
    /// HTTP client.
    client: Client,
    /// Backend origin, e.g. `http://localhost:3000/`.
    base_url: Url,
    /// Bearer token of the signed-in session, if any.
    session_token: Option<SecretString>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the given backend origin.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
            session_token: None,
        }
    }

    /// Build a client from configuration (origin, timeout, session token).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            session_token: config.session_token.clone(),
        })
    }

    /// Attach a bearer session token to every request.
    #[must_use]
    pub fn with_session_token(mut self, token: SecretString) -> Self {
        self.session_token = Some(token);
        self
    }

    /// Backend origin requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an absolute API path against the origin.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the path cannot be joined.
    pub fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Url(format!("{path}: {e}")))
    }

    const fn method(method: ApiMethod) -> Method {
        match method {
            ApiMethod::Post => Method::POST,
            ApiMethod::Patch => Method::PATCH,
            ApiMethod::Delete => Method::DELETE,
        }
    }
}

impl Transport for ApiClient {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(&request.path)?;

        let mut builder = self.client.request(Self::method(request.method), url);
        if let Some(token) = &self.session_token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Dashboard API request failed");
            ApiError::Request(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Response(e.to_string()))?;

        debug!(status, "Dashboard API responded");

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_absolute_paths() {
        let client = ApiClient::new(Url::parse("http://localhost:3000").unwrap());
        let url = client.url_for("/api/stores").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/stores");
    }

    #[test]
    fn test_url_for_replaces_base_path() {
        // Absolute API paths always resolve from the origin.
        let client = ApiClient::new(Url::parse("http://localhost:3000/dashboard/").unwrap());
        let url = client.url_for("/api/stores").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/stores");
    }

    #[test]
    fn test_debug_redacts_session_token() {
        let client = ApiClient::new(Url::parse("http://localhost:3000").unwrap())
            .with_session_token(SecretString::from("sess_super_secret_token"));

        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("localhost:3000"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sess_super_secret_token"));
    }
}
