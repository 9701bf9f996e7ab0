//! Typed async client for the StorageGRID grid and tenant management API.
//!
//! ```no_run
//! use storagegrid_core::{ApiClient, Credentials, GridClient};
//!
//! # async fn run() -> storagegrid_core::Result<()> {
//! let client = ApiClient::builder()
//!     .endpoint("grid.example.com")
//!     .credentials(Credentials::new("root", "secret"))
//!     .build()?;
//! let grid = GridClient::new(client);
//!
//! let health = grid.health().get().await?;
//! println!("all green: {}", health.all_green());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api::{ApiClient, ApiError, ClientBuilder, GridClient, RawResponse, Result, TenantClient, Transport, TransportExt};
pub use auth::{Credentials, Session, SessionToken};
pub use config::ClientConfig;

// Compile-time assertions: clients and errors are shared across tasks.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<ApiClient>;
    let _ = assert_send_sync::<GridClient>;
    let _ = assert_send_sync::<TenantClient>;
    let _ = assert_send_sync::<Session>;
    let _ = assert_send_sync::<ApiError>;
};
