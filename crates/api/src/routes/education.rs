//! Route definitions for courses and workshops.

use axum::routing::get;
use axum::Router;

use crate::handlers::education;
use crate::state::AppState;

/// Routes mounted at `/education`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(education::list).post(education::create))
        .route("/categories", get(education::categories))
        .route("/{id}", get(education::detail))
}
