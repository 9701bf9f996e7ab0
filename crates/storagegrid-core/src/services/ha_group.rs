//! High-availability groups (private grid API).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::require_id;
use crate::api::{Result, Transport, TransportExt};
use crate::models::HaGroup;

const ENDPOINT: &str = "/private/ha-groups";

#[async_trait]
pub trait HaGroupService: Send + Sync {
    async fn list(&self) -> Result<Vec<HaGroup>>;
    async fn get_by_id(&self, id: &str) -> Result<HaGroup>;
    async fn create(&self, group: &HaGroup) -> Result<HaGroup>;
    async fn update(&self, group: &HaGroup) -> Result<HaGroup>;
    async fn delete(&self, id: &str) -> Result<()>;
}

pub struct HttpHaGroupService {
    transport: Arc<dyn Transport>,
}

impl HttpHaGroupService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl HaGroupService for HttpHaGroupService {
    async fn list(&self) -> Result<Vec<HaGroup>> {
        self.transport.get_data(ENDPOINT).await
    }

    async fn get_by_id(&self, id: &str) -> Result<HaGroup> {
        self.transport.get_data(&format!("{}/{}", ENDPOINT, id)).await
    }

    async fn create(&self, group: &HaGroup) -> Result<HaGroup> {
        self.transport.send_data(Method::POST, ENDPOINT, group).await
    }

    async fn update(&self, group: &HaGroup) -> Result<HaGroup> {
        let id = require_id("HA group", Some(group.id.as_str()))?;
        self.transport
            .send_data(Method::PUT, &format!("{}/{}", ENDPOINT, id), group)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete_path(&format!("{}/{}", ENDPOINT, id)).await
    }
}
