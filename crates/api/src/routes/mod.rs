pub mod admin;
pub mod assets;
pub mod education;
pub mod health;
pub mod investors;
pub mod legal;
pub mod product_services;
pub mod studios;
pub mod talents;
pub mod tickets;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                      list (GET), create (POST, auth)
/// /assets/categories           category names
/// /assets/{id}                 detail
///
/// /studios, /talents, /legal, /education,
/// /tickets, /investors, /product-services
///                              same shape as /assets
///
/// /admin/overview              per-vertical listing counts (auth)
/// /admin/{resource}            caller's listings plus stats (auth)
///
/// /uploads                     multipart image upload (POST, auth)
/// ```
///
/// `/health` is mounted at the root, not here.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", assets::router())
        .nest("/studios", studios::router())
        .nest("/talents", talents::router())
        .nest("/legal", legal::router())
        .nest("/education", education::router())
        .nest("/tickets", tickets::router())
        .nest("/investors", investors::router())
        .nest("/product-services", product_services::router())
        .nest("/admin", admin::router())
        .nest("/uploads", uploads::router())
}
