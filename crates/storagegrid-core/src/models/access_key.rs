use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An S3 credential pair and the user/account it belongs to.
///
/// `access_key` and `secret_access_key` are only returned by the create call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Obfuscated access key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "userURN", skip_serializing_if = "Option::is_none")]
    pub user_urn: Option<String>,
    #[serde(rename = "userUUID", skip_serializing_if = "Option::is_none")]
    pub user_uuid: Option<String>,
    /// `None` means the key never expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
}

impl AccessKey {
    /// Request body for a key that expires at the given time.
    pub fn expiring(expires: DateTime<Utc>) -> Self {
        Self {
            expires: Some(expires),
            ..Default::default()
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires.map(|e| Utc::now() >= e).unwrap_or(false)
    }
}
