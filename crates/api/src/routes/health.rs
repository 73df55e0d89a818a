use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Marketplace backend reachability: `disabled`, `ok`, or `unreachable`.
    pub upstream: &'static str,
}

/// GET /health -- returns service and marketplace backend health.
///
/// Seed-only mode is healthy: the backend being `disabled` is a supported
/// configuration, not a degradation. Only a configured but unreachable
/// backend degrades the status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, upstream) = match state.upstream.as_deref() {
        None => ("ok", "disabled"),
        Some(api) => {
            if api.ping().await.is_ok() {
                ("ok", "ok")
            } else {
                ("degraded", "unreachable")
            }
        }
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        upstream,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
