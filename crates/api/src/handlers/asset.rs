//! Handlers for the gear marketplace (cameras, lenses, grip, and the rest
//! of the rental/sale catalog).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backlot_core::catalog::asset::{self, AssetListing, CreateAsset};
use backlot_core::validation::validate_payload;
use backlot_core::{ListingId, Owned, Vertical};

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::query::ListingQuery;
use crate::response::DataResponse;
use crate::services::catalog as listings;
use crate::state::AppState;

/// `GET /api/v1/assets`
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Json<DataResponse<Vec<Owned<AssetListing>>>> {
    let data = listings::browse(&state, Vertical::Asset, asset::seed_assets, &viewer, query).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/assets/categories`
pub async fn categories() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: asset::categories().to_vec(),
    })
}

/// `GET /api/v1/assets/{id}`
pub async fn detail(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<ListingId>,
) -> AppResult<Json<DataResponse<Owned<AssetListing>>>> {
    let data = listings::detail(&state, Vertical::Asset, asset::seed_assets, &viewer, id).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/v1/assets`
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<DataResponse<AssetListing>>)> {
    validate_payload(&payload)?;
    let created: AssetListing =
        listings::create_listing(&state, Vertical::Asset, &payload, &user).await?;
    tracing::info!(asset_id = created.id, user_id = user.user_id, "Asset listing created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
