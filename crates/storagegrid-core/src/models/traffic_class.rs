//! Traffic classification policies (bandwidth and request-rate limits).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficClass {
    pub id: String,
    /// Display only, not necessarily unique
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficPolicy {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub matchers: Vec<TrafficMatcher>,
    #[serde(default)]
    pub limits: Vec<TrafficLimit>,
}

impl TrafficPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn limit(&self, limit_type: LimitType) -> Option<u64> {
        self.limits
            .iter()
            .find(|l| l.limit_type == limit_type)
            .map(|l| l.value)
    }
}

/// Selects the traffic a policy applies to, e.g. by bucket or tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficMatcher {
    /// e.g. "bucket", "bucket-regex", "user", "tenant", "endpoint", "ip-address"
    #[serde(rename = "type")]
    pub matcher_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficLimit {
    #[serde(rename = "type")]
    pub limit_type: LimitType,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LimitType {
    AggregateBandwidthIn,
    AggregateBandwidthOut,
    ConcurrentReadRequests,
    ConcurrentWriteRequests,
    ReadRequestRate,
    WriteRequestRate,
    PerRequestBandwidthIn,
    PerRequestBandwidthOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_body() {
        let mut policy = TrafficPolicy::new("slow-tenant");
        policy.matchers.push(TrafficMatcher {
            matcher_type: "tenant".to_string(),
            inverse: None,
            members: vec!["27825399029832".to_string()],
        });
        policy.limits.push(TrafficLimit {
            limit_type: LimitType::ReadRequestRate,
            value: 100,
        });

        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["matchers"][0]["type"], "tenant");
        assert_eq!(json["limits"][0]["type"], "readRequestRate");
        assert_eq!(json["limits"][0]["value"], 100);
        assert_eq!(policy.limit(LimitType::ReadRequestRate), Some(100));
        assert_eq!(policy.limit(LimitType::WriteRequestRate), None);
    }

    #[test]
    fn test_limit_type_names() {
        let parsed: LimitType = serde_json::from_str("\"perRequestBandwidthOut\"").unwrap();
        assert_eq!(parsed, LimitType::PerRequestBandwidthOut);
        assert!(serde_json::from_str::<LimitType>("\"unlimited\"").is_err());
    }
}
