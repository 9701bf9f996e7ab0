//! Load balancer endpoints ("gateway configs") and their server settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(rename = "enableIPv4", skip_serializing_if = "Option::is_none")]
    pub enable_ipv4: Option<bool>,
    #[serde(rename = "enableIPv6", skip_serializing_if = "Option::is_none")]
    pub enable_ipv6: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_targets: Option<PinTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_interfaces: Option<ManagementInterfaces>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_on_untrusted_client_network: Option<bool>,
}

/// Restricts which HA groups, node interfaces or node types serve an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinTargets {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ha_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_interfaces: Vec<NodeInterface>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementInterfaces {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_grid_manager: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_tenant_manager: Option<bool>,
}

/// Service type, tenant restrictions and certificate of an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// "s3" or "swift"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_restriction_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub account_restrictions: Vec<String>,
    /// "plaintext", "grid" or "generated"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaintext_cert_data: Option<PlaintextCertData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaintextCertData {
    /// PEM-encoded server certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_certificate_encoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_bundle_encoded: Option<String>,
    /// Filled in by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CertMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_certificate_details: Option<CertificateDetails>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ca_bundle_details: Vec<CertificateDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finger_prints: Option<FingerPrints>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject_alt_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FingerPrints {
    #[serde(rename = "SHA-1", skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(rename = "SHA-256", skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}
