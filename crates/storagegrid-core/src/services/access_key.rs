//! S3 access keys of the signed-in user or of any tenant user.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use crate::api::{Result, Transport, TransportExt};
use crate::models::AccessKey;

const CURRENT_USER_ENDPOINT: &str = "/org/users/current-user/s3-access-keys";

fn user_endpoint(user_id: &str) -> String {
    format!("/org/users/{}/s3-access-keys", user_id)
}

#[async_trait]
pub trait AccessKeyService: Send + Sync {
    async fn list_for_current_user(&self) -> Result<Vec<AccessKey>>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<AccessKey>>;
    async fn get_for_current_user(&self, id: &str) -> Result<AccessKey>;
    async fn get_for_user(&self, user_id: &str, id: &str) -> Result<AccessKey>;
    /// The returned key carries the secret; it cannot be fetched again later.
    async fn create_for_current_user(&self, key: &AccessKey) -> Result<AccessKey>;
    async fn create_for_user(&self, user_id: &str, key: &AccessKey) -> Result<AccessKey>;
    async fn delete_for_current_user(&self, id: &str) -> Result<()>;
    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<()>;
}

pub struct HttpAccessKeyService {
    transport: Arc<dyn Transport>,
}

impl HttpAccessKeyService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl AccessKeyService for HttpAccessKeyService {
    async fn list_for_current_user(&self) -> Result<Vec<AccessKey>> {
        self.transport.get_data(CURRENT_USER_ENDPOINT).await
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<AccessKey>> {
        self.transport.get_data(&user_endpoint(user_id)).await
    }

    async fn get_for_current_user(&self, id: &str) -> Result<AccessKey> {
        self.transport
            .get_data(&format!("{}/{}", CURRENT_USER_ENDPOINT, id))
            .await
    }

    async fn get_for_user(&self, user_id: &str, id: &str) -> Result<AccessKey> {
        self.transport
            .get_data(&format!("{}/{}", user_endpoint(user_id), id))
            .await
    }

    async fn create_for_current_user(&self, key: &AccessKey) -> Result<AccessKey> {
        self.transport.send_data(Method::POST, CURRENT_USER_ENDPOINT, key).await
    }

    async fn create_for_user(&self, user_id: &str, key: &AccessKey) -> Result<AccessKey> {
        self.transport
            .send_data(Method::POST, &user_endpoint(user_id), key)
            .await
    }

    async fn delete_for_current_user(&self, id: &str) -> Result<()> {
        self.transport
            .delete_path(&format!("{}/{}", CURRENT_USER_ENDPOINT, id))
            .await
    }

    async fn delete_for_user(&self, user_id: &str, id: &str) -> Result<()> {
        self.transport
            .delete_path(&format!("{}/{}", user_endpoint(user_id), id))
            .await
    }
}
