use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::Credentials;
use crate::api::{ApiError, Result};

/// Path of the login endpoint, relative to the API root.
pub const LOGIN_PATH: &str = "/authorize";

/// Endpoints that issue tokens and therefore must never require one.
const AUTHORIZE_PATHS: &[&str] = &[LOGIN_PATH];

/// Layout of the `Expires` header returned by the login endpoint.
pub const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Whether a request path is exempt from authentication.
pub fn is_login_path(path: &str) -> bool {
    AUTHORIZE_PATHS.contains(&path)
}

/// `EXPIRES_FORMAT` without the weekday, which is not checked against the date.
const EXPIRES_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S GMT";

/// Parse an RFC 1123 `Expires` header value (always GMT).
///
/// The leading weekday name is ignored, so a server that gets it wrong
/// still yields a usable expiry.
pub fn parse_expires(value: Option<&str>) -> Result<DateTime<Utc>> {
    let value = value.ok_or_else(|| ApiError::Auth("missing Expires header".to_string()))?;
    let trimmed = value.trim();
    let date = trimmed.split_once(", ").map_or(trimmed, |(_, rest)| rest);
    NaiveDateTime::parse_from_str(date, EXPIRES_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| ApiError::Auth(format!("failed to parse token expiration {:?}: {}", value, e)))
}

/// Bearer token and its absolute expiry, always read and replaced together.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn time_until_expiry(&self) -> Duration {
        self.expires_at - Utc::now()
    }
}

/// Performs the login round trip on behalf of a `Session`.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authorize(&self, credentials: &Credentials) -> Result<SessionToken>;
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<SessionToken>,
    /// Number of login attempts that ran to completion.
    attempts: u64,
    /// Error of the most recent attempt, if it failed.
    last_error: Option<ApiError>,
}

/// Owns the bearer token of one client instance.
///
/// The freshness check, the login and the snapshot handed out for the
/// `Authorization` header all happen under one async mutex, so concurrent
/// callers collapse into a single login and never see a torn
/// (token, expiry) pair. Callers that queued on the lock while a login
/// resolved receive that login's outcome instead of starting another one.
pub struct Session {
    credentials: Option<Credentials>,
    state: Mutex<SessionState>,
    completed: AtomicU64,
}

impl Session {
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self {
            credentials,
            state: Mutex::new(SessionState::default()),
            completed: AtomicU64::new(0),
        }
    }

    /// Return a usable bearer token, logging in first when none is held or
    /// the held one has expired.
    ///
    /// Dropping the returned future mid-login leaves the session untouched.
    pub async fn bearer_token(&self, authenticator: &dyn Authenticator) -> Result<String> {
        let observed = self.completed.load(Ordering::Acquire);
        let mut state = self.state.lock().await;

        if state.attempts != observed {
            // A login resolved while this caller was queued on the lock.
            if let Some(ref err) = state.last_error {
                return Err(err.clone());
            }
            if let Some(ref token) = state.token {
                return Ok(token.token.clone());
            }
        }

        if let Some(ref token) = state.token {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
            debug!(expired_at = %token.expires_at, "Session token expired");
        }

        let credentials = match self.credentials.as_ref() {
            Some(credentials) => credentials,
            None => return Err(ApiError::Auth("no credentials configured".to_string())),
        };

        debug!(username = %credentials.username, "Logging in");
        let outcome = authenticator.authorize(credentials).await;

        state.attempts += 1;
        let result = match outcome {
            Ok(token) => {
                info!(expires_at = %token.expires_at, "Session token acquired");
                let bearer = token.token.clone();
                state.token = Some(token);
                state.last_error = None;
                Ok(bearer)
            }
            Err(err) => {
                warn!(error = %err, "Login failed");
                state.last_error = Some(err.clone());
                Err(err)
            }
        };
        self.completed.store(state.attempts, Ordering::Release);

        result
    }

    /// Snapshot of the current token, if any.
    pub async fn token(&self) -> Option<SessionToken> {
        self.state.lock().await.token.clone()
    }

    /// Check if a token is held and has not expired
    pub async fn is_authenticated(&self) -> bool {
        self.state
            .lock()
            .await
            .token
            .as_ref()
            .map(|t| !t.is_expired())
            .unwrap_or(false)
    }

    /// Adopt a token obtained elsewhere, e.g. from an earlier process.
    pub async fn set_token(&self, token: SessionToken) {
        self.state.lock().await.token = Some(token);
    }
}
