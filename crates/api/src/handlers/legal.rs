//! Handlers for production legal services.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backlot_core::catalog::legal::{self, CreateLegalService, LegalService};
use backlot_core::validation::validate_payload;
use backlot_core::{ListingId, Owned, Vertical};

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::query::ListingQuery;
use crate::response::DataResponse;
use crate::services::catalog as listings;
use crate::state::AppState;

/// `GET /api/v1/legal`
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Json<DataResponse<Vec<Owned<LegalService>>>> {
    let data = listings::browse(&state, Vertical::Legal, legal::seed_legal, &viewer, query).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/legal/categories`
pub async fn categories() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: legal::categories().to_vec(),
    })
}

/// `GET /api/v1/legal/{id}`
pub async fn detail(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<ListingId>,
) -> AppResult<Json<DataResponse<Owned<LegalService>>>> {
    let data = listings::detail(&state, Vertical::Legal, legal::seed_legal, &viewer, id).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/v1/legal`
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateLegalService>,
) -> AppResult<(StatusCode, Json<DataResponse<LegalService>>)> {
    validate_payload(&payload)?;
    let created: LegalService =
        listings::create_listing(&state, Vertical::Legal, &payload, &user).await?;
    tracing::info!(legal_id = created.id, user_id = user.user_id, "Legal service created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
