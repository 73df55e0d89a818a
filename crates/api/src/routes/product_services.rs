//! Route definitions for production products and services.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/product-services`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route("/categories", get(product::categories))
        .route("/{id}", get(product::detail))
}
