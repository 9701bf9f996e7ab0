//! Grid tenant accounts.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::require_id;
use crate::api::{Result, Transport, TransportExt};
use crate::models::{Tenant, TenantUsage};

const ENDPOINT: &str = "/grid/accounts";

#[async_trait]
pub trait TenantService: Send + Sync {
    async fn list(&self) -> Result<Vec<Tenant>>;
    async fn get_by_id(&self, id: &str) -> Result<Tenant>;
    async fn create(&self, tenant: &Tenant) -> Result<Tenant>;
    async fn update(&self, tenant: &Tenant) -> Result<Tenant>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn get_usage(&self, id: &str) -> Result<TenantUsage>;
}

pub struct HttpTenantService {
    transport: Arc<dyn Transport>,
}

impl HttpTenantService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl TenantService for HttpTenantService {
    async fn list(&self) -> Result<Vec<Tenant>> {
        self.transport.get_data(ENDPOINT).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Tenant> {
        self.transport.get_data(&format!("{}/{}", ENDPOINT, id)).await
    }

    async fn create(&self, tenant: &Tenant) -> Result<Tenant> {
        self.transport.send_data(Method::POST, ENDPOINT, tenant).await
    }

    async fn update(&self, tenant: &Tenant) -> Result<Tenant> {
        let id = require_id("tenant", Some(tenant.id.as_str()))?;
        self.transport
            .send_data(Method::PUT, &format!("{}/{}", ENDPOINT, id), tenant)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete_path(&format!("{}/{}", ENDPOINT, id)).await
    }

    async fn get_usage(&self, id: &str) -> Result<TenantUsage> {
        self.transport.get_data(&format!("{}/{}/usage", ENDPOINT, id)).await
    }
}
