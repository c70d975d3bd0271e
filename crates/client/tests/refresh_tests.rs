//! Integration tests for the authentication-recovery protocol
//!
//! The interesting properties all concern concurrency: however many requests
//! observe a 401 at once, exactly one refresh call goes out, queued requests
//! replay with the new token, and the logout side effect fires at most once.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use playdeck_client::{AdminClient, ClientError};
use playdeck_core::credentials::{CredentialStore, Credentials, MemoryCredentialStore};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    client: AdminClient,
    store: Arc<MemoryCredentialStore>,
    logouts: Arc<AtomicUsize>,
}

fn harness(server: &MockServer, credentials: Credentials) -> Harness {
    let store = Arc::new(MemoryCredentialStore::with_credentials(credentials));
    let logouts = Arc::new(AtomicUsize::new(0));
    let counter = logouts.clone();
    let client = AdminClient::builder()
        .base_url(server.uri())
        .credential_store(store.clone())
        .on_logout(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();
    Harness {
        client,
        store,
        logouts,
    }
}

fn stats_body() -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "total_users": 10, "active_users": 8, "banned_users": 2,
            "total_games": 5, "published_games": 3, "pending_games": 2,
            "total_credits_issued": 1000, "total_credits_consumed": 400
        },
        "message": "ok"
    })
}

async fn mount_expired_then_valid(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("authorization", "Bearer T1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Refresh endpoint that takes a moment, so concurrent 401s pile up behind
/// the in-flight refresh
async fn mount_slow_refresh(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/admin/auth/refresh"))
        .and(body_json(json!({"refresh_token": "R1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "T2", "refresh_token": "R2"}))
                .set_delay(Duration::from_millis(150)),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn concurrent_401s_share_a_single_refresh() {
    let server = MockServer::start().await;
    let h = harness(&server, Credentials::new("T1", "R1"));

    mount_expired_then_valid(&server, "/admin/get-platform-stats", stats_body()).await;
    mount_slow_refresh(&server).await;

    let results = futures::future::join_all((0..5).map(|_| {
        let client = h.client.clone();
        async move { client.platform_stats().await }
    }))
    .await;

    for result in results {
        assert_eq!(result.unwrap().total_users, 10);
    }
    assert_eq!(h.store.access_token().as_deref(), Some("T2"));
    assert_eq!(h.store.refresh_token().as_deref(), Some("R2"));
    assert_eq!(h.logouts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn queued_request_replays_with_new_token() {
    let server = MockServer::start().await;
    let h = harness(&server, Credentials::new("T1", "R1"));

    // Request A and request B hit different endpoints; both 401 on T1
    mount_expired_then_valid(&server, "/admin/get-platform-stats", stats_body()).await;
    mount_expired_then_valid(
        &server,
        "/admin/list-credit-configs",
        json!({
            "success": true,
            "data": {"items": [], "total": 0},
            "message": "ok"
        }),
    )
    .await;
    mount_slow_refresh(&server).await;

    let a = h.client.clone();
    let b = h.client.clone();
    let (stats, configs) =
        tokio::join!(a.platform_stats(), b.list_credit_configs());

    assert_eq!(stats.unwrap().total_users, 10);
    assert_eq!(configs.unwrap().total, 0);
    assert_eq!(h.store.access_token().as_deref(), Some("T2"));
}

#[tokio::test]
async fn refresh_endpoint_401_is_terminal() {
    let server = MockServer::start().await;
    let h = harness(&server, Credentials::new("T1", "R1"));

    Mock::given(method("POST"))
        .and(path("/admin/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "refresh expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = h.client.refresh_session().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
    assert_eq!(h.logouts.load(Ordering::SeqCst), 1);
    assert!(h.store.access_token().is_none());
}

#[tokio::test]
async fn second_401_after_replay_is_terminal() {
    let server = MockServer::start().await;
    let h = harness(&server, Credentials::new("T1", "R1"));

    // Always 401, whatever the token: original + one replay, never a third
    Mock::given(method("GET"))
        .and(path("/admin/get-platform-stats"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "T2", "refresh_token": "R2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = h.client.platform_stats().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
    assert_eq!(h.logouts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_refresh_rejects_all_queued_requests() {
    let server = MockServer::start().await;
    let h = harness(&server, Credentials::new("T1", "R1"));

    Mock::given(method("GET"))
        .and(path("/admin/get-platform-stats"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": "refresh expired"}))
                .set_delay(Duration::from_millis(150)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let results = futures::future::join_all((0..5).map(|_| {
        let client = h.client.clone();
        async move { client.platform_stats().await }
    }))
    .await;

    for result in results {
        assert!(matches!(result.unwrap_err(), ClientError::Unauthenticated));
    }
    // One refresh, one logout, credentials gone
    assert_eq!(h.logouts.load(Ordering::SeqCst), 1);
    assert!(h.store.access_token().is_none());
}

#[tokio::test]
async fn missing_refresh_token_skips_the_refresh_call() {
    let server = MockServer::start().await;
    let h = harness(&server, Credentials::access_only("T1"));

    Mock::given(method("GET"))
        .and(path("/admin/get-platform-stats"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = h.client.platform_stats().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
    assert_eq!(h.logouts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn domain_auth_code_redirects_without_refresh() {
    let server = MockServer::start().await;
    let h = harness(&server, Credentials::new("T1", "R1"));

    // AUTH_003 arrives on a 400, not a 401: the code alone is terminal
    Mock::given(method("GET"))
        .and(path("/admin/get-platform-stats"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "AUTH_003",
            "message": "token format invalid"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let results = futures::future::join_all((0..5).map(|_| {
        let client = h.client.clone();
        async move { client.platform_stats().await }
    }))
    .await;

    for result in results {
        assert!(matches!(result.unwrap_err(), ClientError::Unauthenticated));
    }
    // Five terminal failures in the same breath, one logout
    assert_eq!(h.logouts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn legacy_refresh_response_key_is_accepted() {
    let server = MockServer::start().await;
    let h = harness(&server, Credentials::new("T1", "R1"));

    mount_expired_then_valid(&server, "/admin/get-platform-stats", stats_body()).await;
    Mock::given(method("POST"))
        .and(path("/admin/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "T2"})))
        .expect(1)
        .mount(&server)
        .await;

    let stats = h.client.platform_stats().await.unwrap();
    assert_eq!(stats.total_users, 10);
    assert_eq!(h.store.access_token().as_deref(), Some("T2"));
    // No new refresh token in the response: the old one is kept
    assert_eq!(h.store.refresh_token().as_deref(), Some("R1"));
}

#[tokio::test]
async fn logout_guard_rearms_after_login() {
    let server = MockServer::start().await;
    let h = harness(&server, Credentials::access_only("T1"));

    Mock::given(method("GET"))
        .and(path("/admin/get-platform-stats"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"access_token": "T3", "refresh_token": "R3"},
            "message": "ok"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/get-platform-stats"))
        .and(header("authorization", "Bearer T3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .mount(&server)
        .await;

    // First session dies: no refresh token, logout fires
    let err = h.client.platform_stats().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
    assert_eq!(h.logouts.load(Ordering::SeqCst), 1);

    // Fresh login re-arms the guard and the client works again
    h.client.login("root@playdeck.dev", "hunter2").await.unwrap();
    let stats = h.client.platform_stats().await.unwrap();
    assert_eq!(stats.total_users, 10);
    assert_eq!(h.logouts.load(Ordering::SeqCst), 1);
}
