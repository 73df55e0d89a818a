//! Route definitions for the gear marketplace.

use axum::routing::get;
use axum::Router;

use crate::handlers::asset;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET  /              -> list
/// POST /              -> create (auth required)
/// GET  /categories    -> categories
/// GET  /{id}          -> detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(asset::list).post(asset::create))
        .route("/categories", get(asset::categories))
        .route("/{id}", get(asset::detail))
}
