//! REST client module for the StorageGRID management API.
//!
//! This module provides the `ApiClient` transport and the two entry points
//! built on it: `GridClient` for grid administrators and `TenantClient`
//! for tenant account users.
//!
//! Both APIs live under `<endpoint>/api/v4` and use a bearer token obtained
//! from the `/authorize` endpoint; the token is managed by `auth::Session`.

pub mod client;
pub mod error;
pub mod grid;
pub mod tenant;

pub use client::{ApiClient, ClientBuilder, RawResponse, Transport, TransportExt};
pub use error::{ApiError, Result};
pub use grid::GridClient;
pub use tenant::TenantClient;
