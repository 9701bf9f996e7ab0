use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Prefix every local tenant group's unique name carries.
pub const GROUP_PREFIX: &str = "group/";

/// A tenant group and the policies granted to its members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// `group/<name>` or `federated-group/<name>`
    pub unique_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<GroupPolicies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federated: Option<bool>,
    #[serde(rename = "groupURN", skip_serializing_if = "Option::is_none")]
    pub group_urn: Option<String>,
}

impl Group {
    pub fn new(unique_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            unique_name: unique_name.into(),
            display_name: Some(display_name.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupPolicies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management: Option<ManagementPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Policy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift: Option<SwiftPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_all_containers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_endpoints: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_own_s3_credentials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_own_container_objects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_all_containers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_access: Option<bool>,
}

/// An S3 bucket-style policy document; field names follow the AWS casing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statement: Vec<S3Statement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Statement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// "Allow" or "Deny"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_action: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_resource: Vec<String>,
    /// Operator -> condition key -> value(s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<BTreeMap<String, BTreeMap<String, serde_json::Value>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwiftPolicy {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_casing() {
        let group = Group {
            policies: Some(GroupPolicies {
                management: Some(ManagementPolicy {
                    manage_own_s3_credentials: Some(true),
                    ..Default::default()
                }),
                s3: Some(S3Policy {
                    statement: vec![S3Statement {
                        effect: Some("Allow".to_string()),
                        action: vec!["s3:*".to_string()],
                        resource: vec!["arn:aws:s3:::*".to_string()],
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
                swift: None,
            }),
            ..Group::new("group/ops", "Operations")
        };

        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["uniqueName"], "group/ops");
        assert_eq!(json["policies"]["management"]["manageOwnS3Credentials"], true);
        assert_eq!(json["policies"]["s3"]["Statement"][0]["Effect"], "Allow");
        assert_eq!(json["policies"]["s3"]["Statement"][0]["Action"][0], "s3:*");
    }

    #[test]
    fn test_parse_condition() {
        let json = r#"{"Effect":"Deny","NotAction":["s3:GetObject"],"Condition":{"IpAddress":{"aws:SourceIp":"10.0.0.0/8"}}}"#;
        let statement: S3Statement = serde_json::from_str(json).unwrap();
        let condition = statement.condition.unwrap();
        assert_eq!(condition["IpAddress"]["aws:SourceIp"], "10.0.0.0/8");
        assert_eq!(statement.not_action, vec!["s3:GetObject".to_string()]);
    }
}
