//! Login behaviour of a client against a mock StorageGRID endpoint.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use reqwest::Method;
use serde_json::json;
use storagegrid_core::auth::session::EXPIRES_FORMAT;
use storagegrid_core::{ApiClient, ApiError, Credentials, GridClient, SessionToken, Transport};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn expires_header(at: DateTime<Utc>) -> String {
    at.format(EXPIRES_FORMAT).to_string()
}

fn login_response(token: &str, expires_at: DateTime<Utc>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Expires", expires_header(expires_at).as_str())
        .set_body_json(json!({"status": "success", "apiVersion": "4.0", "data": token}))
}

fn regions_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"status": "success", "apiVersion": "4.0", "data": ["us-east-1"]}))
}

fn grid_client(server: &MockServer) -> GridClient {
    let client = ApiClient::builder()
        .endpoint(server.uri())
        .credentials(Credentials::new("root", "secret"))
        .build()
        .unwrap();
    GridClient::new(client)
}

#[tokio::test]
async fn test_concurrent_requests_share_one_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/authorize"))
        .and(body_json(json!({"username": "root", "password": "secret"})))
        .respond_with(
            login_response("token-1", Utc::now() + Duration::hours(1)).set_delay(StdDuration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/grid/regions"))
        .and(header("authorization", "Bearer token-1"))
        .respond_with(regions_response())
        .expect(8)
        .mount(&server)
        .await;

    let grid = grid_client(&server);
    let results = join_all((0..8).map(|_| grid.regions().list())).await;

    for result in results {
        assert_eq!(result.unwrap(), vec!["us-east-1"]);
    }
}

#[tokio::test]
async fn test_concurrent_requests_share_one_login_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/authorize"))
        .respond_with(ResponseTemplate::new(401).set_delay(StdDuration::from_millis(200)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/grid/regions"))
        .respond_with(regions_response())
        .expect(0)
        .mount(&server)
        .await;

    let grid = grid_client(&server);
    let results = join_all((0..5).map(|_| grid.regions().list())).await;

    for result in results {
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
        assert_eq!(err.to_string(), "Authentication failed: login rejected: 401 Unauthorized");
    }
    assert!(grid.session().token().await.is_none());
}

#[tokio::test]
async fn test_login_request_carries_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/authorize"))
        .respond_with(login_response("token-1", Utc::now() + Duration::hours(1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/grid/regions"))
        .respond_with(regions_response())
        .mount(&server)
        .await;

    let grid = grid_client(&server);
    grid.regions().list().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let login = &requests[0];
    assert_eq!(login.url.path(), "/api/v4/authorize");
    assert!(login.headers.get("authorization").is_none());
    assert_eq!(
        requests[1].headers.get("authorization").unwrap().to_str().unwrap(),
        "Bearer token-1"
    );
}

#[tokio::test]
async fn test_login_path_never_carries_held_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/authorize"))
        .respond_with(login_response("token-2", Utc::now() + Duration::hours(1)))
        .expect(1)
        .mount(&server)
        .await;

    let grid = grid_client(&server);
    grid.session()
        .set_token(SessionToken::new("held", Utc::now() + Duration::hours(1)))
        .await;

    let response = grid
        .api_client()
        .execute_raw(Method::POST, "/authorize", Some(json!({"username": "root", "password": "secret"})))
        .await
        .unwrap();
    assert!(response.status.is_success());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    // Calling the login path directly does not replace the session's token.
    assert_eq!(grid.session().token().await.unwrap().token, "held");
}

#[tokio::test]
async fn test_expired_token_triggers_exactly_one_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/authorize"))
        .respond_with(login_response("fresh", Utc::now() + Duration::hours(1)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/grid/regions"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(regions_response())
        .expect(3)
        .mount(&server)
        .await;

    let grid = grid_client(&server);
    grid.session()
        .set_token(SessionToken::new("stale", Utc::now() - Duration::seconds(5)))
        .await;

    for _ in 0..3 {
        grid.regions().list().await.unwrap();
    }
}

#[tokio::test]
async fn test_future_expiry_skips_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/authorize"))
        .respond_with(login_response("unused", Utc::now() + Duration::hours(1)))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/grid/regions"))
        .and(header("authorization", "Bearer cached"))
        .respond_with(regions_response())
        .expect(2)
        .mount(&server)
        .await;

    let grid = grid_client(&server);
    grid.session()
        .set_token(SessionToken::new("cached", Utc::now() + Duration::minutes(30)))
        .await;

    grid.regions().list().await.unwrap();
    grid.regions().list().await.unwrap();
}

#[tokio::test]
async fn test_token_is_reused_until_its_hour_runs_out() {
    let server = MockServer::start().await;
    let expires_at = Utc::now() + Duration::hours(1);
    Mock::given(method("POST"))
        .and(path("/api/v4/authorize"))
        .respond_with(login_response("hourly", expires_at))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/grid/regions"))
        .respond_with(regions_response())
        .expect(3)
        .mount(&server)
        .await;

    let grid = grid_client(&server);
    grid.regions().list().await.unwrap();
    grid.regions().list().await.unwrap();

    let token = grid.session().token().await.unwrap();
    assert_eq!(token.token, "hourly");
    // Expires carries whole seconds only.
    assert!((token.expires_at - expires_at).num_seconds().abs() <= 1);

    // An hour later the same token is past its expiry.
    grid.session()
        .set_token(SessionToken::new(token.token, Utc::now() - Duration::seconds(1)))
        .await;
    grid.regions().list().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let logins: Vec<_> = requests
        .iter()
        .filter(|r| r.url.path() == "/api/v4/authorize")
        .collect();
    assert_eq!(logins.len(), 2);
    for login in logins {
        assert!(login.headers.get("authorization").is_none());
    }
}

#[tokio::test]
async fn test_missing_expires_header_fails_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/authorize"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "success", "apiVersion": "4.0", "data": "t"})),
        )
        .mount(&server)
        .await;

    let grid = grid_client(&server);
    let err = grid.login().await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(ref m) if m.contains("Expires")));
    assert!(grid.session().token().await.is_none());
}

#[tokio::test]
async fn test_tenant_login_sends_account_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v4/authorize"))
        .and(body_json(json!({"accountId": "27825399029832", "username": "admin", "password": "pw"})))
        .respond_with(login_response("tenant-token", Utc::now() + Duration::hours(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::builder()
        .endpoint(server.uri())
        .credentials(Credentials::for_account("27825399029832", "admin", "pw"))
        .build()
        .unwrap();
    client.login().await.unwrap();
    assert!(client.session().is_authenticated().await);
}
