//! Storage usage reported for a tenant and its buckets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_bytes: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<BucketStats>,
}

impl TenantUsage {
    pub fn bucket(&self, name: &str) -> Option<&BucketStats> {
        self.buckets.iter().find(|b| b.name.as_deref() == Some(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_bytes: Option<i64>,
    /// e.g. "available"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<String>,
    /// e.g. "AES256"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning_suspended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_bucket_stats() {
        let json = r#"{"calculationTime":"2024-05-01T10:00:00Z","objectCount":12,"dataBytes":2048,"buckets":[{"name":"logs","objectCount":10,"dataBytes":2000},{"name":"media","objectCount":2,"dataBytes":48}]}"#;
        let usage: TenantUsage = serde_json::from_str(json).unwrap();
        assert_eq!(usage.object_count, Some(12));
        assert_eq!(usage.bucket("media").and_then(|b| b.data_bytes), Some(48));
        assert!(usage.bucket("missing").is_none());
    }
}
