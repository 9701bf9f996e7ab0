//! The envelope wrapped around every management API response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic response envelope; `data` carries the request-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// When the server generated the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<DateTime<Utc>>,
    /// Result of the request, e.g. "success"
    #[serde(default)]
    pub status: String,
    /// Major and minor version of the API
    #[serde(default)]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.unwrap_or(false)
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_envelope() {
        let json = r#"{"responseTime":"2024-05-01T10:00:00.000Z","status":"success","apiVersion":"4.0","data":"abc-123"}"#;
        let envelope: Envelope<String> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, "success");
        assert_eq!(envelope.api_version, "4.0");
        assert!(!envelope.is_deprecated());
        assert!(envelope.response_time.is_some());
        assert_eq!(envelope.into_data(), "abc-123");
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let json = r#"{"status":"success","apiVersion":"4.0"}"#;
        assert!(serde_json::from_str::<Envelope<Vec<String>>>(json).is_err());
    }

    #[test]
    fn test_deprecated_flag() {
        let json = r#"{"status":"success","apiVersion":"3.4","deprecated":true,"data":["us-east-1"]}"#;
        let envelope: Envelope<Vec<String>> = serde_json::from_str(json).unwrap();
        assert!(envelope.is_deprecated());
        assert_eq!(envelope.data, vec!["us-east-1".to_string()]);
    }
}
