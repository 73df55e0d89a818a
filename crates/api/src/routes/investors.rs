//! Route definitions for the film financing directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::investor;
use crate::state::AppState;

/// Routes mounted at `/investors`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(investor::list).post(investor::create))
        .route("/categories", get(investor::categories))
        .route("/{id}", get(investor::detail))
}
