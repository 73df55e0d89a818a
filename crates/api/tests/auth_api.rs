//! Integration tests for authentication gating and creation-payload
//! validation.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get_auth, mint_token, post_json, post_json_auth};
use serde_json::json;
use tower::ServiceExt;

use backlot_api::auth::jwt;

fn valid_asset_payload() -> serde_json::Value {
    json!({
        "title": "RED Komodo 6K",
        "category": "cameras",
        "description": "Body, media, two batteries.",
        "price": 325.0
    })
}

// ---------------------------------------------------------------------------
// Test: protected endpoints require a bearer token
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_without_token_returns_401() {
    let (app, _media) = common::build_test_app();
    let response = post_json(app, "/api/v1/assets", valid_asset_payload()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[tokio::test]
async fn admin_views_require_a_token() {
    for path in ["/api/v1/admin/assets", "/api/v1/admin/overview"] {
        let (app, _media) = common::build_test_app();
        let response = common::get(app, path).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "GET {path}");
    }
}

#[tokio::test]
async fn uploads_require_a_token() {
    let (app, _media) = common::build_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/uploads")
        .header("Content-Type", "multipart/form-data; boundary=xyz")
        .body(Body::from("--xyz--\r\n"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: malformed and expired credentials
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let (app, _media) = common::build_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/assets")
        .header("Content-Type", "application/json")
        .header("Authorization", "Token abc123")
        .body(Body::from(valid_asset_payload().to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Invalid Authorization format. Expected: Bearer <token>"
    );
}

#[tokio::test]
async fn expired_token_is_rejected() {
    // Mint a token that expired ten minutes ago.
    let mut config = common::test_jwt_config();
    config.access_token_expiry_mins = -10;
    let token = jwt::generate_access_token(101, &config).unwrap();

    let (app, _media) = common::build_test_app();
    let response = post_json_auth(app, "/api/v1/assets", valid_asset_payload(), &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

#[tokio::test]
async fn token_signed_with_wrong_secret_is_rejected() {
    let config = backlot_api::auth::jwt::JwtConfig {
        secret: "some-other-secret".to_string(),
        access_token_expiry_mins: 60,
    };
    let token = jwt::generate_access_token(101, &config).unwrap();

    let (app, _media) = common::build_test_app();
    let response = post_json_auth(app, "/api/v1/assets", valid_asset_payload(), &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: creation payloads are validated before anything is forwarded
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_title_returns_validation_error() {
    let token = mint_token(101);
    let payload = json!({
        "title": "   ",
        "category": "cameras",
        "description": "Body only.",
        "price": 100.0
    });

    let (app, _media) = common::build_test_app();
    let response = post_json_auth(app, "/api/v1/assets", payload, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("title"), "message names the field: {message}");
    assert!(message.contains("must not be blank"));
}

#[tokio::test]
async fn negative_price_returns_validation_error() {
    let token = mint_token(101);
    let payload = json!({
        "title": "RED Komodo 6K",
        "category": "cameras",
        "description": "Body only.",
        "price": -1.0
    });

    let (app, _media) = common::build_test_app();
    let response = post_json_auth(app, "/api/v1/assets", payload, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("price"));
}

#[tokio::test]
async fn course_duration_must_be_at_least_one_week() {
    let token = mint_token(101);
    let payload = json!({
        "title": "Directing actors weekend intensive",
        "category": "directing",
        "description": "Two days of scene work.",
        "price": 400.0,
        "online": true,
        "duration_weeks": 0,
        "instructor": "R. Vasquez"
    });

    let (app, _media) = common::build_test_app();
    let response = post_json_auth(app, "/api/v1/education", payload, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("duration_weeks"));
}

// ---------------------------------------------------------------------------
// Test: creation without a configured backend is a 503
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_without_backend_returns_503() {
    let token = mint_token(101);

    let (app, _media) = common::build_test_app();
    let response = post_json_auth(app, "/api/v1/assets", valid_asset_payload(), &token).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_UNCONFIGURED");
    assert_eq!(
        json["error"],
        "Listing creation requires the marketplace backend, which is not configured"
    );
}

// ---------------------------------------------------------------------------
// Test: a valid token does not grant someone else's ownership
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_view_with_valid_token_succeeds() {
    let token = mint_token(101);

    let (app, _media) = common::build_test_app();
    let response = get_auth(app, "/api/v1/admin/assets", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
}
