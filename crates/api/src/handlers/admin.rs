//! Owner dashboard handlers.
//!
//! Every endpoint here requires authentication and only ever shows the
//! caller their own records. There is no privileged role: "admin" in the
//! route names means "manage my listings", matching the site's admin pages.

use axum::extract::State;
use axum::Json;

use backlot_core::catalog::{asset, education, investor, legal, product, studio, talent, ticket};
use backlot_core::Vertical;

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::services::catalog::{admin_view, overview, AdminView, OverviewEntry};
use crate::state::AppState;

/// `GET /api/v1/admin/assets`
pub async fn assets(
    State(state): State<AppState>,
    user: AuthUser,
) -> Json<DataResponse<AdminView<asset::AssetListing>>> {
    let data = admin_view(&state, Vertical::Asset, asset::seed_assets, &user).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/admin/studios`
pub async fn studios(
    State(state): State<AppState>,
    user: AuthUser,
) -> Json<DataResponse<AdminView<studio::Studio>>> {
    let data = admin_view(&state, Vertical::Studio, studio::seed_studios, &user).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/admin/talents`
pub async fn talents(
    State(state): State<AppState>,
    user: AuthUser,
) -> Json<DataResponse<AdminView<talent::TalentProfile>>> {
    let data = admin_view(&state, Vertical::Talent, talent::seed_talent, &user).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/admin/legal`
pub async fn legal(
    State(state): State<AppState>,
    user: AuthUser,
) -> Json<DataResponse<AdminView<legal::LegalService>>> {
    let data = admin_view(&state, Vertical::Legal, legal::seed_legal, &user).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/admin/education`
pub async fn education(
    State(state): State<AppState>,
    user: AuthUser,
) -> Json<DataResponse<AdminView<education::CourseListing>>> {
    let data = admin_view(&state, Vertical::Education, education::seed_courses, &user).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/admin/tickets`
pub async fn tickets(
    State(state): State<AppState>,
    user: AuthUser,
) -> Json<DataResponse<AdminView<ticket::TicketListing>>> {
    let data = admin_view(&state, Vertical::Ticket, ticket::seed_tickets, &user).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/admin/investors`
pub async fn investors(
    State(state): State<AppState>,
    user: AuthUser,
) -> Json<DataResponse<AdminView<investor::InvestorProfile>>> {
    let data = admin_view(&state, Vertical::Investor, investor::seed_investors, &user).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/admin/product-services`
pub async fn product_services(
    State(state): State<AppState>,
    user: AuthUser,
) -> Json<DataResponse<AdminView<product::ProductService>>> {
    let data = admin_view(&state, Vertical::ProductService, product::seed_products, &user).await;
    Json(DataResponse { data })
}

/// `GET /api/v1/admin/overview`
pub async fn admin_overview(
    State(state): State<AppState>,
    user: AuthUser,
) -> Json<DataResponse<Vec<OverviewEntry>>> {
    let data = overview(&state, &user).await;
    Json(DataResponse { data })
}
