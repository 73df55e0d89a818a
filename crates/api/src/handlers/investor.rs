//! Handlers for the film financing directory.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backlot_core::catalog::investor::{self, CreateInvestorProfile, InvestorProfile};
use backlot_core::validation::validate_payload;
use backlot_core::{ListingId, Owned, Vertical};

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::query::ListingQuery;
use crate::response::DataResponse;
use crate::services::catalog as listings;
use crate::state::AppState;

/// `GET /api/v1/investors`
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Json<DataResponse<Vec<Owned<InvestorProfile>>>> {
    let data =
        listings::browse(&state, Vertical::Investor, investor::seed_investors, &viewer, query)
            .await;
    Json(DataResponse { data })
}

/// `GET /api/v1/investors/categories`
pub async fn categories() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: investor::categories().to_vec(),
    })
}

/// `GET /api/v1/investors/{id}`
pub async fn detail(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<ListingId>,
) -> AppResult<Json<DataResponse<Owned<InvestorProfile>>>> {
    let data =
        listings::detail(&state, Vertical::Investor, investor::seed_investors, &viewer, id).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/v1/investors`
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateInvestorProfile>,
) -> AppResult<(StatusCode, Json<DataResponse<InvestorProfile>>)> {
    validate_payload(&payload)?;
    let created: InvestorProfile =
        listings::create_listing(&state, Vertical::Investor, &payload, &user).await?;
    tracing::info!(
        investor_id = created.id,
        user_id = user.user_id,
        "Investor profile created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
