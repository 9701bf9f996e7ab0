use serde::{Deserialize, Serialize};

/// A high-availability group of virtual IPs bound to node interfaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_cidr: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_ips: Vec<String>,
    /// Ordered by priority; the first interface is the preferred primary.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<HaInterface>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaInterface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ha_group() {
        let json = r#"{"id":"ha-1","name":"front","gatewayCidr":"10.0.0.1/24","virtualIps":["10.0.0.10"],"interfaces":[{"nodeId":"n-1","interface":"eth2"}]}"#;
        let group: HaGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.virtual_ips, vec!["10.0.0.10".to_string()]);
        assert_eq!(group.interfaces[0].interface.as_deref(), Some("eth2"));
    }
}
