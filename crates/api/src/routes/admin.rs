//! Route definitions for the owner dashboards.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All of them require authentication.
///
/// ```text
/// GET /overview            -> admin_overview
/// GET /assets              -> assets
/// GET /studios             -> studios
/// GET /talents             -> talents
/// GET /legal               -> legal
/// GET /education           -> education
/// GET /tickets             -> tickets
/// GET /investors           -> investors
/// GET /product-services    -> product_services
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(admin::admin_overview))
        .route("/assets", get(admin::assets))
        .route("/studios", get(admin::studios))
        .route("/talents", get(admin::talents))
        .route("/legal", get(admin::legal))
        .route("/education", get(admin::education))
        .route("/tickets", get(admin::tickets))
        .route("/investors", get(admin::investors))
        .route("/product-services", get(admin::product_services))
}
