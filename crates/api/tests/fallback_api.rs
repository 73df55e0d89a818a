//! Integration tests for the marketplace-backend integration: live data
//! replacing the seed catalogs, fallback on failure or emptiness, token
//! forwarding, and creation.
//!
//! Each test spawns a small stub backend on an ephemeral port rather than
//! mocking the HTTP client.

mod common;

use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use common::{body_json, get as get_req, get_auth, mint_token, post_json_auth};
use serde_json::json;

/// A complete asset record as the backend would serve it.
fn backend_asset(id: i64, user_id: i64, title: &str, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": user_id,
        "title": title,
        "category": "cameras",
        "description": "From the live backend.",
        "price": 500.0,
        "location": "Chicago, IL",
        "condition": "good",
        "image_urls": [],
        "tags": [],
        "rating": 4.2,
        "created_at": created_at
    })
}

/// Stub backend serving a fixed asset list.
fn backend_serving(records: serde_json::Value) -> Router {
    Router::new().route(
        "/assets",
        get(move || {
            let records = records.clone();
            async move { Json(records) }
        }),
    )
}

// ---------------------------------------------------------------------------
// Test: live backend data replaces the seed catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn live_backend_data_replaces_seeds() {
    let records = json!([
        backend_asset(41, 7, "Blackmagic Pocket 6K", "2026-08-01T00:00:00Z"),
        backend_asset(42, 8, "Cooke S4 prime set", "2026-08-02T00:00:00Z"),
    ]);
    let base_url = common::spawn_backend(backend_serving(records)).await;

    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    let response = get_req(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Newest first: id 42 was created a day later.
    assert_eq!(rows[0]["id"], 42);
    assert_eq!(rows[1]["id"], 41);
}

#[tokio::test]
async fn detail_is_served_from_live_data() {
    let records = json!([backend_asset(42, 8, "Cooke S4 prime set", "2026-08-02T00:00:00Z")]);
    let base_url = common::spawn_backend(backend_serving(records)).await;

    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    let response = get_req(app, "/api/v1/assets/42").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Cooke S4 prime set");

    // Seed ids are gone once the backend answers with data.
    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    let response = get_req(app, "/api/v1/assets/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: failures and empty answers fall back to seeds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backend_error_falls_back_to_seeds() {
    let backend = Router::new().route(
        "/assets",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = common::spawn_backend(backend).await;

    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    let response = get_req(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn unreachable_backend_falls_back_to_seeds() {
    // Bind and immediately drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    let response = get_req(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn empty_backend_answer_falls_back_to_seeds() {
    let base_url = common::spawn_backend(backend_serving(json!([]))).await;

    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    let response = get_req(app, "/api/v1/assets").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
}

// ---------------------------------------------------------------------------
// Test: the caller's bearer token is forwarded verbatim
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bearer_token_is_forwarded_to_the_backend() {
    let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let seen_handler = Arc::clone(&seen);

    let backend = Router::new().route(
        "/assets",
        get(move |headers: HeaderMap| {
            let seen = Arc::clone(&seen_handler);
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                *seen.lock().unwrap() = auth;
                Json(json!([]))
            }
        }),
    );
    let base_url = common::spawn_backend(backend).await;

    let token = mint_token(101);
    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    get_auth(app, "/api/v1/assets", &token).await;

    let captured = seen.lock().unwrap().clone();
    assert_eq!(captured, Some(format!("Bearer {token}")));
}

#[tokio::test]
async fn anonymous_browse_sends_no_authorization() {
    let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let seen_handler = Arc::clone(&seen);

    let backend = Router::new().route(
        "/assets",
        get(move |headers: HeaderMap| {
            let seen = Arc::clone(&seen_handler);
            async move {
                *seen.lock().unwrap() = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                Json(json!([]))
            }
        }),
    );
    let base_url = common::spawn_backend(backend).await;

    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    get_req(app, "/api/v1/assets").await;

    assert_eq!(*seen.lock().unwrap(), None);
}

// ---------------------------------------------------------------------------
// Test: creation is forwarded and the backend's record comes back
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_forwards_to_the_backend() {
    let backend = Router::new().route(
        "/assets",
        post(|Json(payload): Json<serde_json::Value>| async move {
            // Echo the payload back as the stored record.
            let mut record = payload;
            record["id"] = json!(999);
            record["user_id"] = json!(101);
            record["rating"] = json!(null);
            record["created_at"] = json!("2026-08-20T00:00:00Z");
            (StatusCode::CREATED, Json(record))
        }),
    );
    let base_url = common::spawn_backend(backend).await;

    let token = mint_token(101);
    let payload = json!({
        "title": "RED Komodo 6K",
        "category": "cameras",
        "description": "Body, media, two batteries.",
        "price": 325.0
    });

    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    let response = post_json_auth(app, "/api/v1/assets", payload, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 999);
    assert_eq!(json["data"]["title"], "RED Komodo 6K");
}

#[tokio::test]
async fn create_surfaces_backend_failure_as_502() {
    let backend = Router::new().route(
        "/assets",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = common::spawn_backend(backend).await;

    let token = mint_token(101);
    let payload = json!({
        "title": "RED Komodo 6K",
        "category": "cameras",
        "description": "Body, media, two batteries.",
        "price": 325.0
    });

    let (app, _media) = common::build_test_app_with_upstream(&base_url);
    let response = post_json_auth(app, "/api/v1/assets", payload, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "The marketplace backend could not be reached");
}
