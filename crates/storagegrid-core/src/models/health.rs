//! Grid health summary and the verdicts derived from it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Health {
    /// Legacy alarm counts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarms: Option<Alarms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Alerts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Nodes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alarms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alerts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nodes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<u32>,
    #[serde(rename = "administratively-down", skip_serializing_if = "Option::is_none")]
    pub administratively_down: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown: Option<u32>,
}

fn is_zero(count: Option<u32>) -> bool {
    count.unwrap_or(0) == 0
}

impl Health {
    pub fn no_alarms(&self) -> bool {
        match self.alarms {
            Some(ref a) => is_zero(a.critical) && is_zero(a.major) && is_zero(a.minor) && is_zero(a.notice),
            None => true,
        }
    }

    pub fn no_alerts(&self) -> bool {
        match self.alerts {
            Some(ref a) => is_zero(a.critical) && is_zero(a.major) && is_zero(a.minor),
            None => true,
        }
    }

    /// No node is administratively down or in an unknown state.
    pub fn all_connected(&self) -> bool {
        match self.nodes {
            Some(ref n) => is_zero(n.administratively_down) && is_zero(n.unknown),
            None => true,
        }
    }

    pub fn all_green(&self) -> bool {
        self.all_connected() && self.no_alarms() && self.no_alerts()
    }

    /// No major alerts and at most `max_unavailable` nodes not connected.
    pub fn operative(&self, max_unavailable: u32) -> bool {
        if let Some(ref alerts) = self.alerts {
            if !is_zero(alerts.major) {
                return false;
            }
        }

        if let Some(ref nodes) = self.nodes {
            let not_connected = nodes
                .administratively_down
                .unwrap_or(0)
                .saturating_add(nodes.unknown.unwrap_or(0));
            if not_connected > max_unavailable {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(json: &str) -> Health {
        serde_json::from_str(json).expect("valid health JSON")
    }

    #[test]
    fn test_empty_health_is_green() {
        let h = Health::default();
        assert!(h.all_green());
        assert!(h.operative(0));
    }

    #[test]
    fn test_all_green() {
        let h = health(
            r#"{"alarms":{"critical":0,"major":0,"minor":0,"notice":0},"alerts":{"critical":0,"major":0,"minor":0},"nodes":{"connected":5,"administratively-down":0,"unknown":0}}"#,
        );
        assert!(h.all_green());
    }

    #[test]
    fn test_minor_alert_is_operative_but_not_green() {
        let h = health(r#"{"alerts":{"minor":2},"nodes":{"connected":5}}"#);
        assert!(!h.no_alerts());
        assert!(!h.all_green());
        assert!(h.operative(0));
    }

    #[test]
    fn test_major_alert_is_not_operative() {
        let h = health(r#"{"alerts":{"major":1}}"#);
        assert!(!h.operative(10));
    }

    #[test]
    fn test_unavailable_nodes_threshold() {
        let h = health(r#"{"nodes":{"connected":3,"administratively-down":1,"unknown":1}}"#);
        assert!(!h.all_connected());
        assert!(h.operative(2));
        assert!(!h.operative(1));
    }

    #[test]
    fn test_huge_unavailable_counts_do_not_overflow() {
        let h = Health {
            nodes: Some(Nodes {
                administratively_down: Some(u32::MAX),
                unknown: Some(1),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!h.operative(1));
        assert!(!h.operative(u32::MAX - 1));
    }

    #[test]
    fn test_legacy_alarms() {
        let h = health(r#"{"alarms":{"notice":1}}"#);
        assert!(!h.no_alarms());
        assert!(h.no_alerts());
    }
}
