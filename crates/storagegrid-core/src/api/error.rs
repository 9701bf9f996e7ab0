use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by every client, session and service operation.
///
/// `Clone` so that a single failed login can be handed to every caller that
/// was waiting on it; the non-`Clone` sources are held in `Arc`.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] Arc<serde_json::Error>),

    #[error("{context}: {source}")]
    Network {
        context: String,
        #[source]
        source: Arc<reqwest::Error>,
    },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API error: {status} (code: {code})")]
    Api { status: String, code: u16 },

    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: Arc<serde_json::Error>,
    },

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("Invalid request: {0}")]
    Invalid(String),
}

impl ApiError {
    pub fn from_status(status: StatusCode) -> Self {
        ApiError::Api {
            status: status.to_string(),
            code: status.as_u16(),
        }
    }

    pub(crate) fn network(context: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::Network {
            context: context.into(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn decode(path: &str, source: serde_json::Error) -> Self {
        ApiError::Decode {
            path: path.to_string(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn not_found(kind: &'static str, name: &str) -> Self {
        ApiError::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    /// Numeric HTTP status for API errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for a server-side 404 as well as a client-side lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. }) || self.status_code() == Some(404)
    }

    /// True when the server rejected the bearer token, e.g. when it expired
    /// between the freshness check and the send.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialize(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
