//! Route definitions for studio space bookings.

use axum::routing::get;
use axum::Router;

use crate::handlers::studio;
use crate::state::AppState;

/// Routes mounted at `/studios`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(studio::list).post(studio::create))
        .route("/categories", get(studio::categories))
        .route("/{id}", get(studio::detail))
}
