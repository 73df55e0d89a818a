//! Route definitions for listing image uploads.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Whole-request cap for multipart bodies. Individual files are further
/// limited by `MAX_UPLOAD_BYTES`.
const MAX_UPLOAD_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Routes mounted at `/uploads`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(uploads::upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES))
}
