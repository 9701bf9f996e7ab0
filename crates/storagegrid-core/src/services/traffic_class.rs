use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use crate::api::{Result, Transport, TransportExt};
use crate::models::{TrafficClass, TrafficPolicy};

const ENDPOINT: &str = "/grid/traffic-classes/policies";

/// Traffic classification policies for load balancer endpoints.
#[async_trait]
pub trait TrafficClassService: Send + Sync {
    async fn list(&self) -> Result<Vec<TrafficClass>>;
    async fn create_policy(&self, policy: &TrafficPolicy) -> Result<TrafficPolicy>;
}

pub struct HttpTrafficClassService {
    transport: Arc<dyn Transport>,
}

impl HttpTrafficClassService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl TrafficClassService for HttpTrafficClassService {
    async fn list(&self) -> Result<Vec<TrafficClass>> {
        self.transport.get_data(ENDPOINT).await
    }

    async fn create_policy(&self, policy: &TrafficPolicy) -> Result<TrafficPolicy> {
        self.transport.send_data(Method::POST, ENDPOINT, policy).await
    }
}
