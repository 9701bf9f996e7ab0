//! Tenant buckets.
//!
//! The API has no get-by-name or per-bucket usage endpoint, so both are
//! answered by filtering the bucket list and the tenant usage report.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::api::{ApiError, Result, Transport, TransportExt};
use crate::models::{Bucket, BucketStats, DeleteObjectStatus, TenantUsage};

const ENDPOINT: &str = "/org/containers";
const USAGE_ENDPOINT: &str = "/org/usage";

fn drain_path(name: &str) -> String {
    format!("{}/{}/delete-objects", ENDPOINT, name)
}

#[async_trait]
pub trait BucketService: Send + Sync {
    async fn list(&self) -> Result<Vec<Bucket>>;
    async fn get_by_name(&self, name: &str) -> Result<Bucket>;
    async fn create(&self, bucket: &Bucket) -> Result<Bucket>;
    async fn get_usage(&self, name: &str) -> Result<BucketStats>;
    async fn delete(&self, name: &str) -> Result<()>;
    /// Delete every object in the bucket, keeping the bucket itself.
    async fn drain(&self, name: &str) -> Result<DeleteObjectStatus>;
    async fn drain_status(&self, name: &str) -> Result<DeleteObjectStatus>;
}

pub struct HttpBucketService {
    transport: Arc<dyn Transport>,
}

impl HttpBucketService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl BucketService for HttpBucketService {
    async fn list(&self) -> Result<Vec<Bucket>> {
        self.transport.get_data(ENDPOINT).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Bucket> {
        let buckets = self.list().await?;
        debug!(count = buckets.len(), name = name, "Searching bucket list");
        buckets
            .into_iter()
            .find(|b| b.name == name)
            .ok_or_else(|| ApiError::not_found("bucket", name))
    }

    async fn create(&self, bucket: &Bucket) -> Result<Bucket> {
        self.transport.send_data(Method::POST, ENDPOINT, bucket).await
    }

    async fn get_usage(&self, name: &str) -> Result<BucketStats> {
        let usage: TenantUsage = self.transport.get_data(USAGE_ENDPOINT).await?;
        usage
            .bucket(name)
            .cloned()
            .ok_or_else(|| ApiError::not_found("bucket usage", name))
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.transport.delete_path(&format!("{}/{}", ENDPOINT, name)).await
    }

    async fn drain(&self, name: &str) -> Result<DeleteObjectStatus> {
        let body = json!({ "deleteObjects": "true" });
        self.transport.send_data(Method::POST, &drain_path(name), &body).await
    }

    async fn drain_status(&self, name: &str) -> Result<DeleteObjectStatus> {
        self.transport.get_data(&drain_path(name)).await
    }
}
