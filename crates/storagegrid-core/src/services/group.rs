//! Tenant groups.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::require_id;
use crate::api::{Result, Transport, TransportExt};
use crate::models::{Group, GROUP_PREFIX};

const ENDPOINT: &str = "/org/groups";

#[async_trait]
pub trait GroupService: Send + Sync {
    async fn list(&self) -> Result<Vec<Group>>;
    async fn get_by_id(&self, id: &str) -> Result<Group>;
    async fn get_by_name(&self, name: &str) -> Result<Group>;
    /// Create a local group; `group/` is prepended to `unique_name` when missing.
    async fn create(&self, group: &Group) -> Result<Group>;
    async fn update(&self, group: &Group) -> Result<Group>;
    async fn delete(&self, id: &str) -> Result<()>;
}

pub struct HttpGroupService {
    transport: Arc<dyn Transport>,
}

impl HttpGroupService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl GroupService for HttpGroupService {
    async fn list(&self) -> Result<Vec<Group>> {
        self.transport.get_data(ENDPOINT).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Group> {
        self.transport.get_data(&format!("{}/{}", ENDPOINT, id)).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Group> {
        self.transport
            .get_data(&format!("{}/{}{}", ENDPOINT, GROUP_PREFIX, name))
            .await
    }

    async fn create(&self, group: &Group) -> Result<Group> {
        if group.unique_name.starts_with(GROUP_PREFIX) {
            return self.transport.send_data(Method::POST, ENDPOINT, group).await;
        }
        let mut group = group.clone();
        group.unique_name = format!("{}{}", GROUP_PREFIX, group.unique_name);
        self.transport.send_data(Method::POST, ENDPOINT, &group).await
    }

    async fn update(&self, group: &Group) -> Result<Group> {
        let id = require_id("group", group.id.as_deref())?;
        self.transport
            .send_data(Method::PUT, &format!("{}/{}", ENDPOINT, id), group)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete_path(&format!("{}/{}", ENDPOINT, id)).await
    }
}
