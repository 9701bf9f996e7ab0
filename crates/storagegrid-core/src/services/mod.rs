//! Resource services for the grid and tenant management APIs.
//!
//! Every service is an `#[async_trait]` trait with one production
//! implementation (`Http...Service`) that talks to the API through a shared
//! `Arc<dyn Transport>`. Code written against the traits can be tested with
//! the mocks in `crate::testing`.

pub mod access_key;
pub mod bucket;
pub mod gateway;
pub mod group;
pub mod ha_group;
pub mod health;
pub mod region;
pub mod tenant;
pub mod traffic_class;
pub mod user;

pub use access_key::{AccessKeyService, HttpAccessKeyService};
pub use bucket::{BucketService, HttpBucketService};
pub use gateway::{GatewayConfigService, HttpGatewayConfigService};
pub use group::{GroupService, HttpGroupService};
pub use ha_group::{HaGroupService, HttpHaGroupService};
pub use health::{HealthService, HttpHealthService};
pub use region::{HttpRegionService, RegionService};
pub use tenant::{HttpTenantService, TenantService};
pub use traffic_class::{HttpTrafficClassService, TrafficClassService};
pub use user::{HttpUserService, UserService};

use crate::api::{ApiError, Result};

/// Id of a resource about to be updated; updates are addressed by id.
pub(crate) fn require_id<'a>(kind: &str, id: Option<&'a str>) -> Result<&'a str> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ApiError::Invalid(format!("{} has no id", kind))),
    }
}
