//! Route definitions for crew and talent profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::talent;
use crate::state::AppState;

/// Routes mounted at `/talents`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(talent::list).post(talent::create))
        .route("/categories", get(talent::categories))
        .route("/{id}", get(talent::detail))
}
