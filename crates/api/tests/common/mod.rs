#![allow(dead_code)]

//! Shared helpers for the API integration tests.
//!
//! Tests drive the router in-process via `tower::ServiceExt::oneshot`, so
//! they exercise the exact middleware stack production uses without binding
//! a port. Tests that need a marketplace backend spawn a stub axum server
//! on an ephemeral port instead of mocking the HTTP client.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use backlot_api::auth::jwt::{self, JwtConfig};
use backlot_api::config::{MediaConfig, ServerConfig};
use backlot_api::router::build_app_router;
use backlot_api::state::AppState;
use backlot_media::LocalMediaStore;
use backlot_upstream::UpstreamApi;

/// Secret shared by every test token.
const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `JwtConfig` with a known secret.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 60,
    }
}

/// Build a test `ServerConfig` that stores media under `media_root`.
pub fn test_config(media_root: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upstream_api_url: None,
        max_upload_bytes: 8 * 1024 * 1024,
        media: MediaConfig::Local {
            root: media_root.to_path_buf(),
            public_base_url: "http://localhost:3000/media".to_string(),
        },
        jwt: test_jwt_config(),
    }
}

/// Build the application in seed-only mode (no marketplace backend).
///
/// Returns the media temp dir alongside the router; drop order keeps the
/// directory alive for the duration of the test.
pub fn build_test_app() -> (Router, TempDir) {
    let media_root = TempDir::new().expect("failed to create media temp dir");
    let config = test_config(media_root.path());

    let state = AppState {
        config: Arc::new(config.clone()),
        upstream: None,
        media: Arc::new(LocalMediaStore::new(
            media_root.path(),
            "http://localhost:3000/media",
        )),
    };

    (build_app_router(state, &config), media_root)
}

/// Build the application pointed at a (stub) marketplace backend.
pub fn build_test_app_with_upstream(base_url: &str) -> (Router, TempDir) {
    let media_root = TempDir::new().expect("failed to create media temp dir");
    let mut config = test_config(media_root.path());
    config.upstream_api_url = Some(base_url.to_string());

    let state = AppState {
        config: Arc::new(config.clone()),
        upstream: Some(Arc::new(UpstreamApi::new(base_url.to_string()))),
        media: Arc::new(LocalMediaStore::new(
            media_root.path(),
            "http://localhost:3000/media",
        )),
    };

    (build_app_router(state, &config), media_root)
}

/// Spawn a stub marketplace backend on an ephemeral port and return its
/// base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub backend");
    let addr = listener.local_addr().expect("stub backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub backend died");
    });
    format!("http://{addr}")
}

/// Mint a valid access token for the given user id.
pub fn mint_token(user_id: i64) -> String {
    jwt::generate_access_token(user_id, &test_jwt_config()).expect("failed to mint test token")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Perform a GET request against the app.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request");
    app.oneshot(request).await.expect("request failed")
}

/// Perform a GET request with a bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(path)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("failed to build request");
    app.oneshot(request).await.expect("request failed")
}

/// Perform a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    app.oneshot(request).await.expect("request failed")
}

/// Perform a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    app.oneshot(request).await.expect("request failed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}
