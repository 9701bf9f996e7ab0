//! Storage regions, listed from either the grid or the tenant API.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{Result, Transport, TransportExt};

const GRID_ENDPOINT: &str = "/grid/regions";
const TENANT_ENDPOINT: &str = "/org/regions";

#[async_trait]
pub trait RegionService: Send + Sync {
    async fn list(&self) -> Result<Vec<String>>;
}

pub struct HttpRegionService {
    transport: Arc<dyn Transport>,
    endpoint: &'static str,
}

impl HttpRegionService {
    pub fn grid(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            endpoint: GRID_ENDPOINT,
        }
    }

    pub fn tenant(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            endpoint: TENANT_ENDPOINT,
        }
    }
}

#[async_trait]
impl RegionService for HttpRegionService {
    async fn list(&self) -> Result<Vec<String>> {
        self.transport.get_data(self.endpoint).await
    }
}
