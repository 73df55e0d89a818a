//! Handlers for studio space bookings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backlot_core::catalog::studio::{self, CreateStudio, Studio};
use backlot_core::validation::validate_payload;
use backlot_core::{ListingId, Owned, Vertical};

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::query::ListingQuery;
use crate::response::DataResponse;
use crate::services::catalog as listings;
use crate::state::AppState;

/// `GET /api/v1/studios`
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Json<DataResponse<Vec<Owned<Studio>>>> {
    let data = listings::browse(&state, Vertical::Studio, studio::seed_studios, &viewer, query).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/studios/categories`
pub async fn categories() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: studio::categories().to_vec(),
    })
}

/// `GET /api/v1/studios/{id}`
pub async fn detail(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<ListingId>,
) -> AppResult<Json<DataResponse<Owned<Studio>>>> {
    let data = listings::detail(&state, Vertical::Studio, studio::seed_studios, &viewer, id).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/v1/studios`
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateStudio>,
) -> AppResult<(StatusCode, Json<DataResponse<Studio>>)> {
    validate_payload(&payload)?;
    let created: Studio =
        listings::create_listing(&state, Vertical::Studio, &payload, &user).await?;
    tracing::info!(studio_id = created.id, user_id = user.user_id, "Studio listing created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
