//! Handlers for courses and workshops.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backlot_core::catalog::education::{self, CourseListing, CreateCourseListing};
use backlot_core::validation::validate_payload;
use backlot_core::{ListingId, Owned, Vertical};

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::query::ListingQuery;
use crate::response::DataResponse;
use crate::services::catalog as listings;
use crate::state::AppState;

/// `GET /api/v1/education`
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Json<DataResponse<Vec<Owned<CourseListing>>>> {
    let data =
        listings::browse(&state, Vertical::Education, education::seed_courses, &viewer, query)
            .await;
    Json(DataResponse { data })
}

/// `GET /api/v1/education/categories`
pub async fn categories() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: education::categories().to_vec(),
    })
}

/// `GET /api/v1/education/{id}`
pub async fn detail(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<ListingId>,
) -> AppResult<Json<DataResponse<Owned<CourseListing>>>> {
    let data =
        listings::detail(&state, Vertical::Education, education::seed_courses, &viewer, id).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/v1/education`
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCourseListing>,
) -> AppResult<(StatusCode, Json<DataResponse<CourseListing>>)> {
    validate_payload(&payload)?;
    let created: CourseListing =
        listings::create_listing(&state, Vertical::Education, &payload, &user).await?;
    tracing::info!(course_id = created.id, user_id = user.user_id, "Course listing created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
