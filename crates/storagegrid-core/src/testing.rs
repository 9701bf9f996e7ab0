//! Test doubles for the transport and the service traits.
//!
//! `MockTransport` stands in for the HTTP layer so the real `Http...Service`
//! implementations can be exercised without a server. The `Mock...Service`
//! types replace a whole service: each operation runs its closure when one
//! is set and otherwise returns the type's default value.
//!
//! The module only exists with the `testing` feature (or inside this
//! crate's unit tests), so the example below and `tests/mocks.rs` run with
//! `cargo test --features testing`.
//!
//! ```
//! use storagegrid_core::models::Bucket;
//! use storagegrid_core::services::BucketService;
//! use storagegrid_core::testing::MockBucketService;
//!
//! # tokio_test_block(async {
//! let buckets = MockBucketService {
//!     list: Some(Box::new(|| Ok(vec![Bucket::new("logs")]))),
//!     ..Default::default()
//! };
//! assert_eq!(buckets.list().await.unwrap().len(), 1);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use crate::api::{ApiError, RawResponse, Result, Transport};
use crate::models::{
    AccessKey, Bucket, BucketStats, DeleteObjectStatus, GatewayConfig, Group, HaGroup, Health, ServerConfig,
    Tenant, TenantUsage, TrafficClass, TrafficPolicy, User,
};
use crate::services::{
    AccessKeyService, BucketService, GatewayConfigService, GroupService, HaGroupService, HealthService,
    RegionService, TenantService, TrafficClassService, UserService,
};

/// One request as seen by `MockTransport`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Records every request and answers from a queue of canned responses.
///
/// With an empty queue every request succeeds with an envelope whose
/// `data` is `null`.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<Result<RawResponse>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn envelope_body(data: Value) -> Vec<u8> {
    json!({ "status": "success", "apiVersion": "4.0", "data": data })
        .to_string()
        .into_bytes()
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response whose envelope carries `data`.
    pub fn respond_with_data(&self, data: Value) -> &Self {
        self.respond_with_body(envelope_body(data))
    }

    /// Queue a 200 response with an arbitrary body, e.g. a malformed one.
    pub fn respond_with_body(&self, body: impl Into<Vec<u8>>) -> &Self {
        lock(&self.responses).push_back(Ok(RawResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: body.into(),
        }));
        self
    }

    /// Queue the error a non-2xx response produces.
    pub fn respond_with_status(&self, status: StatusCode) -> &Self {
        self.respond_with_error(ApiError::from_status(status))
    }

    pub fn respond_with_error(&self, err: ApiError) -> &Self {
        lock(&self.responses).push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute_raw(&self, method: Method, path: &str, body: Option<Value>) -> Result<RawResponse> {
        lock(&self.requests).push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        lock(&self.responses).pop_front().unwrap_or_else(|| {
            Ok(RawResponse {
                status: StatusCode::OK,
                headers: HeaderMap::new(),
                body: envelope_body(Value::Null),
            })
        })
    }
}

macro_rules! mock_service {
    (
        $(#[$meta:meta])*
        $name:ident: $service:ident {
            $( fn $op:ident($($arg:ident: $ty:ty),*) -> $ret:ty; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Default)]
        pub struct $name {
            $( pub $op: Option<Box<dyn Fn($($ty),*) -> Result<$ret> + Send + Sync>>, )*
        }

        #[async_trait]
        impl $service for $name {
            $(
                async fn $op(&self $(, $arg: $ty)*) -> Result<$ret> {
                    match self.$op {
                        Some(ref f) => f($($arg),*),
                        None => {
                            let _ = ($($arg,)*);
                            Ok(Default::default())
                        }
                    }
                }
            )*
        }
    };
}

mock_service! {
    MockTenantService: TenantService {
        fn list() -> Vec<Tenant>;
        fn get_by_id(id: &str) -> Tenant;
        fn create(tenant: &Tenant) -> Tenant;
        fn update(tenant: &Tenant) -> Tenant;
        fn delete(id: &str) -> ();
        fn get_usage(id: &str) -> TenantUsage;
    }
}

mock_service! {
    MockHealthService: HealthService {
        fn get() -> Health;
    }
}

mock_service! {
    /// Serves both the grid and the tenant region listing.
    MockRegionService: RegionService {
        fn list() -> Vec<String>;
    }
}

mock_service! {
    MockHaGroupService: HaGroupService {
        fn list() -> Vec<HaGroup>;
        fn get_by_id(id: &str) -> HaGroup;
        fn create(group: &HaGroup) -> HaGroup;
        fn update(group: &HaGroup) -> HaGroup;
        fn delete(id: &str) -> ();
    }
}

mock_service! {
    MockGatewayConfigService: GatewayConfigService {
        fn list() -> Vec<GatewayConfig>;
        fn get_by_id(id: &str) -> GatewayConfig;
        fn create(config: &GatewayConfig) -> GatewayConfig;
        fn update(config: &GatewayConfig) -> GatewayConfig;
        fn delete(id: &str) -> ();
        fn get_server_config(gateway_id: &str) -> ServerConfig;
        fn update_server_config(gateway_id: &str, config: &ServerConfig) -> ServerConfig;
    }
}

mock_service! {
    MockTrafficClassService: TrafficClassService {
        fn list() -> Vec<TrafficClass>;
        fn create_policy(policy: &TrafficPolicy) -> TrafficPolicy;
    }
}

mock_service! {
    MockBucketService: BucketService {
        fn list() -> Vec<Bucket>;
        fn get_by_name(name: &str) -> Bucket;
        fn create(bucket: &Bucket) -> Bucket;
        fn get_usage(name: &str) -> BucketStats;
        fn delete(name: &str) -> ();
        fn drain(name: &str) -> DeleteObjectStatus;
        fn drain_status(name: &str) -> DeleteObjectStatus;
    }
}

mock_service! {
    MockAccessKeyService: AccessKeyService {
        fn list_for_current_user() -> Vec<AccessKey>;
        fn list_for_user(user_id: &str) -> Vec<AccessKey>;
        fn get_for_current_user(id: &str) -> AccessKey;
        fn get_for_user(user_id: &str, id: &str) -> AccessKey;
        fn create_for_current_user(key: &AccessKey) -> AccessKey;
        fn create_for_user(user_id: &str, key: &AccessKey) -> AccessKey;
        fn delete_for_current_user(id: &str) -> ();
        fn delete_for_user(user_id: &str, id: &str) -> ();
    }
}

mock_service! {
    MockUserService: UserService {
        fn list() -> Vec<User>;
        fn get_by_id(id: &str) -> User;
        fn get_by_name(name: &str) -> User;
        fn create(user: &User) -> User;
        fn update(user: &User) -> User;
        fn delete(id: &str) -> ();
        fn set_password(id: &str, password: &str) -> ();
    }
}

mock_service! {
    MockGroupService: GroupService {
        fn list() -> Vec<Group>;
        fn get_by_id(id: &str) -> Group;
        fn get_by_name(name: &str) -> Group;
        fn create(group: &Group) -> Group;
        fn update(group: &Group) -> Group;
        fn delete(id: &str) -> ();
    }
}
