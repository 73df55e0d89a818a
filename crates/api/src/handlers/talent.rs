//! Handlers for crew and talent profiles.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backlot_core::catalog::talent::{self, CreateTalentProfile, TalentProfile};
use backlot_core::validation::validate_payload;
use backlot_core::{ListingId, Owned, Vertical};

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::query::ListingQuery;
use crate::response::DataResponse;
use crate::services::catalog as listings;
use crate::state::AppState;

/// `GET /api/v1/talents`
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Json<DataResponse<Vec<Owned<TalentProfile>>>> {
    let data = listings::browse(&state, Vertical::Talent, talent::seed_talent, &viewer, query).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/talents/categories`
pub async fn categories() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: talent::categories().to_vec(),
    })
}

/// `GET /api/v1/talents/{id}`
pub async fn detail(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<ListingId>,
) -> AppResult<Json<DataResponse<Owned<TalentProfile>>>> {
    let data = listings::detail(&state, Vertical::Talent, talent::seed_talent, &viewer, id).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/v1/talents`
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateTalentProfile>,
) -> AppResult<(StatusCode, Json<DataResponse<TalentProfile>>)> {
    validate_payload(&payload)?;
    let created: TalentProfile =
        listings::create_listing(&state, Vertical::Talent, &payload, &user).await?;
    tracing::info!(talent_id = created.id, user_id = user.user_id, "Talent profile created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
