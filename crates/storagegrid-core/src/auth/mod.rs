//! Authentication module for managing the bearer-token session.
//!
//! This module provides:
//! - `Credentials`: username/password (and optional tenant account) posted to the login endpoint
//! - `Session`: the cached token with its server-assigned expiry, refreshed on demand
//!
//! Tokens are never persisted; a new client always starts unauthenticated.

pub mod credentials;
pub mod session;

pub use credentials::Credentials;
pub use session::{is_login_path, parse_expires, Authenticator, Session, SessionToken, LOGIN_PATH};
