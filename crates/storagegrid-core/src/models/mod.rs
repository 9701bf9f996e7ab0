//! Data models for the StorageGRID management API.
//!
//! This module contains the response envelope and the resource shapes:
//!
//! - `Envelope<T>`: wrapper around every API response
//! - Grid resources: `Tenant`, `Health`, `HaGroup`, `GatewayConfig`, `TrafficClass`
//! - Tenant resources: `Bucket`, `AccessKey`, `User`, `Group`, `TenantUsage`

pub mod access_key;
pub mod bucket;
pub mod gateway;
pub mod group;
pub mod ha_group;
pub mod health;
pub mod response;
pub mod tenant;
pub mod traffic_class;
pub mod usage;
pub mod user;

pub use access_key::AccessKey;
pub use bucket::{Bucket, ComplianceSettings, DefaultRetentionSetting, DeleteObjectStatus, S3ObjectLockSettings};
pub use gateway::{
    CertMetadata, CertificateDetails, FingerPrints, GatewayConfig, ManagementInterfaces, NodeInterface,
    PinTargets, PlaintextCertData, ServerConfig,
};
pub use group::{Group, GroupPolicies, ManagementPolicy, S3Policy, S3Statement, SwiftPolicy, GROUP_PREFIX};
pub use ha_group::{HaGroup, HaInterface};
pub use health::{Alarms, Alerts, Health, Nodes};
pub use response::Envelope;
pub use tenant::{SynchronizeRules, Tenant, TenantPolicy};
pub use traffic_class::{LimitType, TrafficClass, TrafficLimit, TrafficMatcher, TrafficPolicy};
pub use usage::{BucketStats, TenantUsage};
pub use user::{User, USER_PREFIX};
