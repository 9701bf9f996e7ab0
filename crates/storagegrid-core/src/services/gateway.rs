//! Load balancer endpoints and their server (certificate) configuration.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::require_id;
use crate::api::{Result, Transport, TransportExt};
use crate::models::{GatewayConfig, ServerConfig};

const ENDPOINT: &str = "/private/gateway-configs";

fn server_config_path(gateway_id: &str) -> String {
    format!("{}/{}/server-config", ENDPOINT, gateway_id)
}

#[async_trait]
pub trait GatewayConfigService: Send + Sync {
    async fn list(&self) -> Result<Vec<GatewayConfig>>;
    async fn get_by_id(&self, id: &str) -> Result<GatewayConfig>;
    async fn create(&self, config: &GatewayConfig) -> Result<GatewayConfig>;
    async fn update(&self, config: &GatewayConfig) -> Result<GatewayConfig>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn get_server_config(&self, gateway_id: &str) -> Result<ServerConfig>;
    async fn update_server_config(&self, gateway_id: &str, config: &ServerConfig) -> Result<ServerConfig>;
}

pub struct HttpGatewayConfigService {
    transport: Arc<dyn Transport>,
}

impl HttpGatewayConfigService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl GatewayConfigService for HttpGatewayConfigService {
    async fn list(&self) -> Result<Vec<GatewayConfig>> {
        self.transport.get_data(ENDPOINT).await
    }

    async fn get_by_id(&self, id: &str) -> Result<GatewayConfig> {
        self.transport.get_data(&format!("{}/{}", ENDPOINT, id)).await
    }

    async fn create(&self, config: &GatewayConfig) -> Result<GatewayConfig> {
        self.transport.send_data(Method::POST, ENDPOINT, config).await
    }

    async fn update(&self, config: &GatewayConfig) -> Result<GatewayConfig> {
        let id = require_id("gateway config", Some(config.id.as_str()))?;
        self.transport
            .send_data(Method::PUT, &format!("{}/{}", ENDPOINT, id), config)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete_path(&format!("{}/{}", ENDPOINT, id)).await
    }

    async fn get_server_config(&self, gateway_id: &str) -> Result<ServerConfig> {
        self.transport.get_data(&server_config_path(gateway_id)).await
    }

    async fn update_server_config(&self, gateway_id: &str, config: &ServerConfig) -> Result<ServerConfig> {
        self.transport
            .send_data(Method::PUT, &server_config_path(gateway_id), config)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_server_config_round_trip() {
        let transport = Arc::new(MockTransport::new());
        let service = HttpGatewayConfigService::new(transport.clone());

        transport.respond_with_data(json!({"defaultServiceType": "s3", "certSource": "grid"}));
        let mut config = service.get_server_config("gw-1").await.unwrap();
        assert_eq!(config.cert_source.as_deref(), Some("grid"));

        config.account_restriction_mode = Some("allowSelected".to_string());
        config.account_restrictions = vec!["27825399029832".to_string()];
        transport.respond_with_data(serde_json::to_value(&config).unwrap());
        let updated = service.update_server_config("gw-1", &config).await.unwrap();
        assert_eq!(updated, config);

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/private/gateway-configs/gw-1/server-config");
        assert_eq!(requests[1].method, Method::PUT);
        assert_eq!(requests[1].body.as_ref().unwrap()["accountRestrictions"][0], "27825399029832");
    }

    #[tokio::test]
    async fn test_list_create_update_delete() {
        let transport = Arc::new(MockTransport::new());
        let service = HttpGatewayConfigService::new(transport.clone());

        transport.respond_with_data(json!([{"id": "gw-1", "displayName": "s3", "port": 10443}]));
        let configs = service.list().await.unwrap();
        assert_eq!(configs[0].port, Some(10443));

        let mut config = configs[0].clone();
        transport.respond_with_data(json!({"id": "gw-2", "port": 10444}));
        config.id.clear();
        service.create(&config).await.unwrap();

        config.id = "gw-1".to_string();
        transport.respond_with_data(json!({"id": "gw-1"}));
        service.update(&config).await.unwrap();
        service.delete("gw-1").await.unwrap();

        let calls: Vec<_> = transport.requests().into_iter().map(|r| (r.method, r.path)).collect();
        assert_eq!(
            calls,
            vec![
                (Method::GET, "/private/gateway-configs".to_string()),
                (Method::POST, "/private/gateway-configs".to_string()),
                (Method::PUT, "/private/gateway-configs/gw-1".to_string()),
                (Method::DELETE, "/private/gateway-configs/gw-1".to_string()),
            ]
        );
    }
}
