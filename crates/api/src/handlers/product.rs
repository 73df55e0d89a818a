//! Handlers for production products and services.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backlot_core::catalog::product::{self, CreateProductService, ProductService};
use backlot_core::validation::validate_payload;
use backlot_core::{ListingId, Owned, Vertical};

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::query::ListingQuery;
use crate::response::DataResponse;
use crate::services::catalog as listings;
use crate::state::AppState;

/// `GET /api/v1/product-services`
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Json<DataResponse<Vec<Owned<ProductService>>>> {
    let data = listings::browse(
        &state,
        Vertical::ProductService,
        product::seed_products,
        &viewer,
        query,
    )
    .await;
    Json(DataResponse { data })
}

/// `GET /api/v1/product-services/categories`
pub async fn categories() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: product::categories().to_vec(),
    })
}

/// `GET /api/v1/product-services/{id}`
pub async fn detail(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<ListingId>,
) -> AppResult<Json<DataResponse<Owned<ProductService>>>> {
    let data = listings::detail(
        &state,
        Vertical::ProductService,
        product::seed_products,
        &viewer,
        id,
    )
    .await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/v1/product-services`
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateProductService>,
) -> AppResult<(StatusCode, Json<DataResponse<ProductService>>)> {
    validate_payload(&payload)?;
    let created: ProductService =
        listings::create_listing(&state, Vertical::ProductService, &payload, &user).await?;
    tracing::info!(
        product_id = created.id,
        user_id = user.user_id,
        "Product or service listing created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
