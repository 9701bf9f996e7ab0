//! Tenant buckets (containers).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Must be unique across the grid and DNS compliant.
    pub name: String,
    /// Defaults to us-east-1 on the server when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_versioning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_object_lock: Option<S3ObjectLockSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,
    /// Legacy compliance settings; cannot be combined with S3 Object Lock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_object_status: Option<DeleteObjectStatus>,
}

impl Bucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_versioning(mut self, enabled: bool) -> Self {
        self.enable_versioning = Some(enabled);
        self
    }

    pub fn object_lock_enabled(&self) -> bool {
        self.s3_object_lock.as_ref().map(|l| l.enabled).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3ObjectLockSettings {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_retention_setting: Option<DefaultRetentionSetting>,
}

/// Retention applied to new objects; `days` and `years` are exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultRetentionSetting {
    /// "compliance" or "governance"
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_period_minutes: Option<i64>,
}

/// Progress of a drain (delete all objects) operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteObjectStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleting_objects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_object_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_object_bytes: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body() {
        let bucket = Bucket::new("logs").with_region("us-east-1").with_versioning(true);
        let json = serde_json::to_value(&bucket).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "logs", "region": "us-east-1", "enableVersioning": true})
        );
    }

    #[test]
    fn test_parse_object_lock() {
        let json = r#"{"name":"vault","creationTime":"2024-01-15T08:30:00Z","s3ObjectLock":{"enabled":true,"defaultRetentionSetting":{"mode":"compliance","days":30}}}"#;
        let bucket: Bucket = serde_json::from_str(json).unwrap();
        assert!(bucket.object_lock_enabled());
        let retention = bucket.s3_object_lock.unwrap().default_retention_setting.unwrap();
        assert_eq!(retention.mode, "compliance");
        assert_eq!(retention.days, Some(30));
        assert!(bucket.creation_time.is_some());
    }
}
