//! Handlers for event ticket listings. The one vertical with no ratings,
//! so `sort=rating` keeps the incoming order here.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use backlot_core::catalog::ticket::{self, CreateTicketListing, TicketListing};
use backlot_core::validation::validate_payload;
use backlot_core::{ListingId, Owned, Vertical};

use crate::error::AppResult;
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::query::ListingQuery;
use crate::response::DataResponse;
use crate::services::catalog as listings;
use crate::state::AppState;

/// `GET /api/v1/tickets`
pub async fn list(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Query(query): Query<ListingQuery>,
) -> Json<DataResponse<Vec<Owned<TicketListing>>>> {
    let data = listings::browse(&state, Vertical::Ticket, ticket::seed_tickets, &viewer, query).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/tickets/categories`
pub async fn categories() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: ticket::categories().to_vec(),
    })
}

/// `GET /api/v1/tickets/{id}`
pub async fn detail(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<ListingId>,
) -> AppResult<Json<DataResponse<Owned<TicketListing>>>> {
    let data = listings::detail(&state, Vertical::Ticket, ticket::seed_tickets, &viewer, id).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/v1/tickets`
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateTicketListing>,
) -> AppResult<(StatusCode, Json<DataResponse<TicketListing>>)> {
    validate_payload(&payload)?;
    let created: TicketListing =
        listings::create_listing(&state, Vertical::Ticket, &payload, &user).await?;
    tracing::info!(ticket_id = created.id, user_id = user.user_id, "Ticket listing created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}
