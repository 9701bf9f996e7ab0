//! Entry point for the grid administration API.

use std::sync::Arc;

use super::{ApiClient, Result, Transport};
use crate::auth::Session;
use crate::services::{
    GatewayConfigService, HaGroupService, HealthService, HttpGatewayConfigService, HttpHaGroupService,
    HttpHealthService, HttpRegionService, HttpTenantService, HttpTrafficClassService, RegionService,
    TenantService, TrafficClassService,
};

/// Grid administrator client. All services share one `ApiClient`, and so
/// one session: the first request from any of them logs in.
pub struct GridClient {
    client: Arc<ApiClient>,
    tenants: Arc<dyn TenantService>,
    health: Arc<dyn HealthService>,
    regions: Arc<dyn RegionService>,
    ha_groups: Arc<dyn HaGroupService>,
    gateway_configs: Arc<dyn GatewayConfigService>,
    traffic_classes: Arc<dyn TrafficClassService>,
}

impl GridClient {
    pub fn new(client: ApiClient) -> Self {
        Self::from_shared(Arc::new(client))
    }

    pub fn from_shared(client: Arc<ApiClient>) -> Self {
        let transport: Arc<dyn Transport> = client.clone();
        Self {
            tenants: Arc::new(HttpTenantService::new(transport.clone())),
            health: Arc::new(HttpHealthService::new(transport.clone())),
            regions: Arc::new(HttpRegionService::grid(transport.clone())),
            ha_groups: Arc::new(HttpHaGroupService::new(transport.clone())),
            gateway_configs: Arc::new(HttpGatewayConfigService::new(transport.clone())),
            traffic_classes: Arc::new(HttpTrafficClassService::new(transport)),
            client,
        }
    }

    pub fn tenants(&self) -> &dyn TenantService {
        self.tenants.as_ref()
    }

    pub fn health(&self) -> &dyn HealthService {
        self.health.as_ref()
    }

    pub fn regions(&self) -> &dyn RegionService {
        self.regions.as_ref()
    }

    pub fn ha_groups(&self) -> &dyn HaGroupService {
        self.ha_groups.as_ref()
    }

    pub fn gateway_configs(&self) -> &dyn GatewayConfigService {
        self.gateway_configs.as_ref()
    }

    pub fn traffic_classes(&self) -> &dyn TrafficClassService {
        self.traffic_classes.as_ref()
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    /// Log in now instead of on the first request.
    pub async fn login(&self) -> Result<()> {
        self.client.login().await
    }

    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.client
    }
}
