use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{Result, Transport, TransportExt};
use crate::models::Health;

const ENDPOINT: &str = "/grid/health";

/// Grid-wide alarm, alert and node connectivity counts.
#[async_trait]
pub trait HealthService: Send + Sync {
    async fn get(&self) -> Result<Health>;
}

pub struct HttpHealthService {
    transport: Arc<dyn Transport>,
}

impl HttpHealthService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl HealthService for HttpHealthService {
    async fn get(&self) -> Result<Health> {
        self.transport.get_data(ENDPOINT).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_get() {
        let transport = Arc::new(MockTransport::new());
        transport.respond_with_data(json!({
            "alarms": {"critical": 0, "major": 0, "minor": 0, "notice": 0},
            "alerts": {"critical": 0, "major": 1, "minor": 0},
            "nodes": {"connected": 4, "administratively-down": 0, "unknown": 0}
        }));
        let service = HttpHealthService::new(transport.clone());

        let health = service.get().await.unwrap();
        assert!(health.no_alarms());
        assert!(!health.no_alerts());
        assert!(health.all_connected());
        assert_eq!(transport.last_request().unwrap().path, "/grid/health");
    }
}
