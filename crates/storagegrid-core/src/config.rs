//! Endpoint configuration for the management API clients.
//!
//! A `ClientConfig` is built once by `ClientBuilder` and never changes for
//! the lifetime of a client. The endpoint is normalized so that it always
//! carries a scheme and ends in `/`.

use std::time::Duration;

use reqwest::Url;

use crate::api::ApiError;

/// Default HTTP request timeout (connect + read).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root of both the grid and tenant management APIs, relative to the endpoint.
pub(crate) const API_ROOT: &str = "api/v4";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    skip_tls_verify: bool,
    timeout: Duration,
}

impl ClientConfig {
    /// Parse and normalize an endpoint such as `"grid.example.com"`.
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(ApiError::Config("no endpoint set".to_string()));
        }

        let normalized = normalize_endpoint(endpoint);
        let base_url = Url::parse(&normalized)
            .map_err(|e| ApiError::Config(format!("invalid endpoint {}: {}", normalized, e)))?;

        Ok(Self {
            base_url,
            skip_tls_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_skip_tls_verify(mut self, skip: bool) -> Self {
        self.skip_tls_verify = skip;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The normalized endpoint, always ending in `/`.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn skip_tls_verify(&self) -> bool {
        self.skip_tls_verify
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for an API path like `/grid/accounts`.
    pub(crate) fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}{}/{}", self.base_url, API_ROOT, path)
    }
}

/// Prefix `https://` when no scheme is given and enforce a trailing slash.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let mut normalized = if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    };

    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}
