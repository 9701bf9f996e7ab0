//! Grid-level tenant accounts.

use serde::{Deserialize, Serialize};

/// A storage tenant account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Assigned by the grid on creation; empty for new accounts.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Display name, not necessarily unique
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// High-level features such as "s3", "swift" or "management"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_rules: Option<SynchronizeRules>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<TenantPolicy>,
    /// Only present with grid federation; ignored in update bodies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_replica: Option<bool>,
    /// Root password; write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Tenant {
    pub fn new(name: impl Into<String>, capabilities: &[&str]) -> Self {
        Self {
            name: Some(name.into()),
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Which tenant data is cloned across a grid federation connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynchronizeRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_key: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantPolicy {
    /// Use an account-specific identity source instead of the grid-wide one
    #[serde(default)]
    pub use_account_identity_source: bool,
    /// Allow platform services such as CloudMirror
    #[serde(default)]
    pub allow_platform_services: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_select_object_content: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_grid_federation_connections: Vec<String>,
    #[serde(default)]
    pub allow_compliance_mode: bool,
    /// Logical byte quota; `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_object_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retention_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retention_years: Option<u32>,
}
