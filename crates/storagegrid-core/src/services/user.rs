//! Tenant users.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;

use super::require_id;
use crate::api::{Result, Transport, TransportExt};
use crate::models::{User, USER_PREFIX};

const ENDPOINT: &str = "/org/users";

#[async_trait]
pub trait UserService: Send + Sync {
    async fn list(&self) -> Result<Vec<User>>;
    async fn get_by_id(&self, id: &str) -> Result<User>;
    /// Look up a local user by sign-in name (without the `user/` prefix).
    async fn get_by_name(&self, name: &str) -> Result<User>;
    /// Create a local user; `user/` is prepended to `unique_name` when missing.
    async fn create(&self, user: &User) -> Result<User>;
    async fn update(&self, user: &User) -> Result<User>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn set_password(&self, id: &str, password: &str) -> Result<()>;
}

pub struct HttpUserService {
    transport: Arc<dyn Transport>,
}

impl HttpUserService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl UserService for HttpUserService {
    async fn list(&self) -> Result<Vec<User>> {
        self.transport.get_data(ENDPOINT).await
    }

    async fn get_by_id(&self, id: &str) -> Result<User> {
        self.transport.get_data(&format!("{}/{}", ENDPOINT, id)).await
    }

    async fn get_by_name(&self, name: &str) -> Result<User> {
        self.transport
            .get_data(&format!("{}/{}{}", ENDPOINT, USER_PREFIX, name))
            .await
    }

    async fn create(&self, user: &User) -> Result<User> {
        if user.unique_name.starts_with(USER_PREFIX) {
            return self.transport.send_data(Method::POST, ENDPOINT, user).await;
        }
        let mut user = user.clone();
        user.unique_name = format!("{}{}", USER_PREFIX, user.unique_name);
        self.transport.send_data(Method::POST, ENDPOINT, &user).await
    }

    async fn update(&self, user: &User) -> Result<User> {
        let id = require_id("user", user.id.as_deref())?;
        self.transport
            .send_data(Method::PUT, &format!("{}/{}", ENDPOINT, id), user)
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete_path(&format!("{}/{}", ENDPOINT, id)).await
    }

    async fn set_password(&self, id: &str, password: &str) -> Result<()> {
        let body = json!({ "password": password });
        self.transport
            .execute_unit(Method::POST, &format!("{}/{}/change-password", ENDPOINT, id), Some(&body))
            .await
    }
}
