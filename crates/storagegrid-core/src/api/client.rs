//! HTTP transport for the StorageGRID management API.
//!
//! `ApiClient` owns the reqwest connection pool, the immutable endpoint
//! configuration and the bearer-token `Session`. Every request goes through
//! `Transport::execute_raw`; the typed helpers on `TransportExt` add request
//! body encoding and envelope decoding on top of it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiError, Result};
use crate::auth::{is_login_path, parse_expires, Authenticator, Credentials, Session, SessionToken, LOGIN_PATH};
use crate::config::ClientConfig;
use crate::models::Envelope;

/// A successful (2xx) response, before any decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decode the body as a response envelope.
    pub fn envelope<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::decode(path, e))
    }
}

/// Sends one request to the management API.
///
/// Paths are relative to the API root, e.g. `/grid/accounts`. Implementors
/// reject any status outside 2xx with `ApiError::Api`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute_raw(&self, method: Method, path: &str, body: Option<Value>) -> Result<RawResponse>;
}

/// Typed request helpers available on every `Transport`.
#[async_trait]
pub trait TransportExt: Transport {
    /// Send `body` (if any) and decode the response envelope into `T`.
    ///
    /// The body is encoded before anything is sent, so an unencodable body
    /// never reaches the network.
    async fn execute_parsed<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Envelope<T>>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let body = encode_body(body)?;
        let response = self.execute_raw(method, path, body).await?;
        response.envelope(path)
    }

    /// Send a request whose response body is not needed, e.g. a delete.
    async fn execute_unit<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let body = encode_body(body)?;
        self.execute_raw(method, path, body).await?;
        Ok(())
    }

    async fn get_data<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T> {
        Ok(self.execute_parsed::<(), T>(Method::GET, path, None).await?.data)
    }

    async fn send_data<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        Ok(self.execute_parsed(method, path, Some(body)).await?.data)
    }

    async fn delete_path(&self, path: &str) -> Result<()> {
        self.execute_unit::<()>(Method::DELETE, path, None).await
    }
}

impl<T: Transport + ?Sized> TransportExt for T {}

fn encode_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Option<Value>> {
    body.map(serde_json::to_value).transpose().map_err(ApiError::from)
}

/// Client for one StorageGRID endpoint and one set of credentials.
///
/// Shared by the grid and tenant clients behind an `Arc`; reqwest's `Client`
/// pools connections internally.
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    session: Session,
}

impl ApiClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from an already validated configuration.
    pub fn new(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        let http = Client::builder()
            .danger_accept_invalid_certs(config.skip_tls_verify())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {}", e)))?;

        if config.skip_tls_verify() {
            warn!(endpoint = config.base_url(), "TLS certificate verification disabled");
        }

        Ok(Self {
            http,
            config,
            session: Session::new(credentials),
        })
    }

    /// The normalized endpoint, always ending in `/`.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Log in now instead of on the first request.
    pub async fn login(&self) -> Result<()> {
        self.session.bearer_token(self).await.map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> Result<RawResponse> {
        let url = self.config.url_for(path);
        debug!(method = %method, path = path, "Sending request");

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let mut request = self.http.request(method.clone(), &url);
        if let Some(ref body) = body {
            let bytes = serde_json::to_vec(body)?;
            headers
                .entry(header::CONTENT_TYPE)
                .or_insert(HeaderValue::from_static("application/json"));
            request = request.body(bytes);
        }
        request = request.headers(headers);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to send {} request to {}", method, path), e))?;

        let response = Self::check_response(&method, path, response)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("Failed to read response from {}", path), e))?;

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }

    /// Reject non-2xx responses without reading their body.
    fn check_response(method: &Method, path: &str, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!(method = %method, path = path, status = status.as_u16(), "Request failed");
            Err(ApiError::from_status(status))
        }
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn execute_raw(&self, method: Method, path: &str, body: Option<Value>) -> Result<RawResponse> {
        if is_login_path(path) {
            return self.send(method, path, body, None).await;
        }
        let token = self.session.bearer_token(self).await?;
        self.send(method, path, body, Some(&token)).await
    }
}

#[async_trait]
impl Authenticator for ApiClient {
    async fn authorize(&self, credentials: &Credentials) -> Result<SessionToken> {
        let body = serde_json::to_value(credentials)?;
        let response = match self.send(Method::POST, LOGIN_PATH, Some(body), None).await {
            Ok(response) => response,
            Err(ApiError::Api { status, .. }) => {
                return Err(ApiError::Auth(format!("login rejected: {}", status)));
            }
            Err(e) => return Err(e),
        };

        let token = response.envelope::<String>(LOGIN_PATH)?.data;
        let expires_at = parse_expires(response.header(header::EXPIRES.as_str()))?;
        Ok(SessionToken::new(token, expires_at))
    }
}

/// Builder for `ApiClient`.
///
/// ```no_run
/// use storagegrid_core::{ApiClient, Credentials};
///
/// let client = ApiClient::builder()
///     .endpoint("grid.example.com")
///     .credentials(Credentials::new("root", "secret"))
///     .skip_tls_verify(true)
///     .build()?;
/// # Ok::<(), storagegrid_core::ApiError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    endpoint: Option<String>,
    credentials: Option<Credentials>,
    skip_tls_verify: bool,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Accept any server certificate. Only for lab grids with self-signed certs.
    pub fn skip_tls_verify(mut self, skip: bool) -> Self {
        self.skip_tls_verify = skip;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| ApiError::Config("no endpoint set".to_string()))?;

        let mut config = ClientConfig::new(&endpoint)?.with_skip_tls_verify(self.skip_tls_verify);
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        ApiClient::new(config, self.credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_endpoint() {
        let err = ClientBuilder::new().build().err().unwrap();
        assert!(matches!(err, ApiError::Config(ref m) if m == "no endpoint set"));
    }

    #[test]
    fn test_build_normalizes_endpoint() {
        let client = ApiClient::builder().endpoint("example.com").build().unwrap();
        assert_eq!(client.base_url(), "https://example.com/");
    }

    #[test]
    fn test_build_applies_options() {
        let client = ApiClient::builder()
            .endpoint("http://10.0.0.1:8080")
            .skip_tls_verify(true)
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        assert!(client.config().skip_tls_verify());
        assert_eq!(client.config().timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_unencodable_body_fails_before_sending() {
        struct Unencodable;
        impl Serialize for Unencodable {
            fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("not encodable"))
            }
        }
        let err = encode_body(Some(&Unencodable)).unwrap_err();
        assert!(matches!(err, ApiError::Serialize(_)));
    }

    #[test]
    fn test_raw_response_envelope_decode_error() {
        let raw = RawResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: br#"{"status":"success","data":{"id":1}}"#.to_vec(),
        };
        let err = raw.envelope::<Vec<String>>("/grid/regions").unwrap_err();
        assert!(matches!(err, ApiError::Decode { ref path, .. } if path == "/grid/regions"));
    }
}
