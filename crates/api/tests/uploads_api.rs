//! Integration tests for listing image uploads.

mod common;

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{body_json, mint_token};
use tower::ServiceExt;

const BOUNDARY: &str = "backlot-test-boundary";

/// Build a multipart/form-data body from (filename, content type, bytes)
/// parts.
fn multipart_body(parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (filename, content_type, bytes) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"files\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_multipart(app: Router, token: &str, body: Vec<u8>) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/uploads")
        .header("Authorization", format!("Bearer {token}"))
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Count regular files under a directory tree.
fn count_files(dir: &Path) -> usize {
    let mut count = 0;
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return 0,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            count += count_files(&path);
        } else {
            count += 1;
        }
    }
    count
}

// ---------------------------------------------------------------------------
// Test: a multi-file upload answers 201 with one URL per part
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_stores_files_and_returns_urls() {
    let token = mint_token(101);
    let body = multipart_body(&[
        ("hero.jpg", "image/jpeg", b"\xff\xd8\xff fake jpeg"),
        ("detail.png", "image/png", b"\x89PNG fake png"),
    ]);

    let (app, media_root) = common::build_test_app();
    let response = post_multipart(app, &token, body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let urls: Vec<&str> = json["data"]["urls"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u.as_str().unwrap())
        .collect();

    assert_eq!(urls.len(), 2);
    // URLs come back in part order with extensions derived from the
    // declared content type, never the client filename.
    assert!(urls[0].starts_with("http://localhost:3000/media/"));
    assert!(urls[0].ends_with(".jpg"), "got {}", urls[0]);
    assert!(urls[1].ends_with(".png"), "got {}", urls[1]);

    // Both files landed on disk.
    assert_eq!(count_files(media_root.path()), 2);
}

// ---------------------------------------------------------------------------
// Test: rejected uploads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_image_content_type_is_rejected() {
    let token = mint_token(101);
    let body = multipart_body(&[("contract.pdf", "application/pdf", b"%PDF-1.4")]);

    let (app, media_root) = common::build_test_app();
    let response = post_multipart(app, &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNSUPPORTED_MEDIA_TYPE");

    assert_eq!(count_files(media_root.path()), 0);
}

#[tokio::test]
async fn upload_with_no_parts_is_rejected() {
    let token = mint_token(101);
    let body = format!("--{BOUNDARY}--\r\n").into_bytes();

    let (app, _media) = common::build_test_app();
    let response = post_multipart(app, &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "No files were provided");
}

#[tokio::test]
async fn part_without_content_type_is_rejected() {
    let token = mint_token(101);
    // Hand-built part with no Content-Type header.
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; \
         filename=\"mystery.bin\"\r\n\r\nbytes\r\n--{BOUNDARY}--\r\n"
    )
    .into_bytes();

    let (app, _media) = common::build_test_app();
    let response = post_multipart(app, &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Upload part is missing a content type");
}

#[tokio::test]
async fn oversized_file_is_rejected() {
    let token = mint_token(101);
    // One byte over the 8 MiB per-file cap.
    let oversized = vec![0u8; 8 * 1024 * 1024 + 1];
    let body = multipart_body(&[("huge.jpg", "image/jpeg", &oversized)]);

    let (app, media_root) = common::build_test_app();
    let response = post_multipart(app, &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("upload limit"));

    assert_eq!(count_files(media_root.path()), 0);
}

// ---------------------------------------------------------------------------
// Test: stored files are served back under /media
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stored_file_is_served_under_media_route() {
    let token = mint_token(101);
    let body = multipart_body(&[("hero.jpg", "image/jpeg", b"fake jpeg bytes")]);

    let (app, _media_root) = common::build_test_app();
    // Clone the router so we can make a second request after the upload.
    let upload_app = app.clone();
    let response = post_multipart(upload_app, &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let url = json["data"]["urls"][0].as_str().unwrap();
    // Turn the public URL into the locally served path.
    let path = url
        .strip_prefix("http://localhost:3000")
        .expect("url should carry the public base");

    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    assert_eq!(&bytes[..], b"fake jpeg bytes");
}
