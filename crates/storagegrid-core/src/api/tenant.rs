//! Entry point for the tenant management API.

use std::sync::Arc;

use super::{ApiClient, Result, Transport};
use crate::auth::Session;
use crate::services::{
    AccessKeyService, BucketService, GroupService, HttpAccessKeyService, HttpBucketService, HttpGroupService,
    HttpRegionService, HttpUserService, RegionService, UserService,
};

/// Tenant account client. Log in with `Credentials::for_account` so the
/// token is scoped to the tenant.
pub struct TenantClient {
    client: Arc<ApiClient>,
    buckets: Arc<dyn BucketService>,
    access_keys: Arc<dyn AccessKeyService>,
    users: Arc<dyn UserService>,
    groups: Arc<dyn GroupService>,
    regions: Arc<dyn RegionService>,
}

impl TenantClient {
    pub fn new(client: ApiClient) -> Self {
        Self::from_shared(Arc::new(client))
    }

    pub fn from_shared(client: Arc<ApiClient>) -> Self {
        let transport: Arc<dyn Transport> = client.clone();
        Self {
            buckets: Arc::new(HttpBucketService::new(transport.clone())),
            access_keys: Arc::new(HttpAccessKeyService::new(transport.clone())),
            users: Arc::new(HttpUserService::new(transport.clone())),
            groups: Arc::new(HttpGroupService::new(transport.clone())),
            regions: Arc::new(HttpRegionService::tenant(transport)),
            client,
        }
    }

    pub fn buckets(&self) -> &dyn BucketService {
        self.buckets.as_ref()
    }

    pub fn access_keys(&self) -> &dyn AccessKeyService {
        self.access_keys.as_ref()
    }

    pub fn users(&self) -> &dyn UserService {
        self.users.as_ref()
    }

    pub fn groups(&self) -> &dyn GroupService {
        self.groups.as_ref()
    }

    pub fn regions(&self) -> &dyn RegionService {
        self.regions.as_ref()
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    pub async fn login(&self) -> Result<()> {
        self.client.login().await
    }

    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.client
    }
}
