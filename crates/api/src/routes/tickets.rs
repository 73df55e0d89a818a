//! Route definitions for event ticket listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::ticket;
use crate::state::AppState;

/// Routes mounted at `/tickets`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ticket::list).post(ticket::create))
        .route("/categories", get(ticket::categories))
        .route("/{id}", get(ticket::detail))
}
