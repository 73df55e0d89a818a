//! Route definitions for production legal services.

use axum::routing::get;
use axum::Router;

use crate::handlers::legal;
use crate::state::AppState;

/// Routes mounted at `/legal`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(legal::list).post(legal::create))
        .route("/categories", get(legal::categories))
        .route("/{id}", get(legal::detail))
}
