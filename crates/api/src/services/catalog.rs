//! Listing retrieval shared by every vertical's handlers.
//!
//! All reads go through [`fetch_or_seed`]: ask the marketplace backend for
//! the vertical's records and fall back to the built-in seed catalog when
//! the backend is unconfigured, unreachable, or empty. Browse pages
//! therefore always render something, which is the same behavior the
//! original site had.

use serde::de::DeserializeOwned;
use serde::Serialize;

use backlot_core::{
    mark_ownership, owned_by, process_filtered_data, CoreError, Listing, ListingId, ListingStats,
    Owned, Vertical,
};
use backlot_upstream::UpstreamApi;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::query::ListingQuery;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Fetch with seed fallback
// ---------------------------------------------------------------------------

/// Where a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Live records from the marketplace backend.
    Upstream,
    /// The built-in seed catalog.
    Seed,
}

/// Fetch a vertical's records from the backend, falling back to its seed
/// catalog.
///
/// Falls back when no backend is configured, when the request fails, and
/// when the backend answers with an empty list. The caller's bearer token
/// is forwarded when present so the backend can attribute the records it
/// returns.
pub async fn fetch_or_seed<T: DeserializeOwned>(
    upstream: Option<&UpstreamApi>,
    vertical: Vertical,
    seed: fn() -> Vec<T>,
    token: Option<&str>,
) -> (Vec<T>, DataOrigin) {
    let Some(api) = upstream else {
        return (seed(), DataOrigin::Seed);
    };

    match api.list::<T>(vertical.resource(), token).await {
        Ok(items) if !items.is_empty() => (items, DataOrigin::Upstream),
        Ok(_) => {
            tracing::warn!(
                vertical = %vertical,
                "Backend returned no listings, serving seed catalog"
            );
            (seed(), DataOrigin::Seed)
        }
        Err(err) => {
            tracing::warn!(
                vertical = %vertical,
                error = %err,
                "Backend unavailable, serving seed catalog"
            );
            (seed(), DataOrigin::Seed)
        }
    }
}

// ---------------------------------------------------------------------------
// Browse and detail
// ---------------------------------------------------------------------------

/// List a vertical's records with filters, sort, and pagination applied,
/// each annotated with an ownership flag for the viewer.
pub async fn browse<T>(
    state: &AppState,
    vertical: Vertical,
    seed: fn() -> Vec<T>,
    viewer: &MaybeUser,
    query: ListingQuery,
) -> Vec<Owned<T>>
where
    T: Listing + Serialize + DeserializeOwned,
{
    let (items, origin) =
        fetch_or_seed(state.upstream.as_deref(), vertical, seed, viewer.token()).await;
    let (filter, sort, page) = query.into_parts();
    let kept = process_filtered_data(items, &filter, sort, page);
    tracing::debug!(
        vertical = %vertical,
        origin = ?origin,
        count = kept.len(),
        "Listing browse"
    );
    mark_ownership(kept, viewer.user_id())
}

/// Fetch one record by id, annotated with an ownership flag.
pub async fn detail<T>(
    state: &AppState,
    vertical: Vertical,
    seed: fn() -> Vec<T>,
    viewer: &MaybeUser,
    id: ListingId,
) -> AppResult<Owned<T>>
where
    T: Listing + Serialize + DeserializeOwned,
{
    let (items, _) = fetch_or_seed(state.upstream.as_deref(), vertical, seed, viewer.token()).await;

    let listing = items
        .into_iter()
        .find(|item| item.id() == id)
        .ok_or(CoreError::NotFound {
            entity: vertical.entity_name(),
            id,
        })?;

    let is_owner = match (viewer.user_id(), listing.owner_id()) {
        (Some(v), Some(o)) => v == o,
        _ => false,
    };
    Ok(Owned { listing, is_owner })
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Create a record in a vertical by forwarding the validated payload to the
/// marketplace backend under the caller's own token.
///
/// Creation has no seed fallback: without a backend there is nowhere
/// durable to put the record, so the caller gets a 503 instead of a write
/// that would vanish on the next read.
pub async fn create_listing<B, T>(
    state: &AppState,
    vertical: Vertical,
    payload: &B,
    user: &AuthUser,
) -> AppResult<T>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let upstream = state
        .upstream
        .as_ref()
        .ok_or(AppError::UpstreamUnconfigured)?;
    let created = upstream
        .create(vertical.resource(), payload, &user.token)
        .await?;
    Ok(created)
}

// ---------------------------------------------------------------------------
// Admin views
// ---------------------------------------------------------------------------

/// One vertical's admin dashboard: the caller's own records plus aggregate
/// stats over exactly those records.
#[derive(Debug, Serialize)]
pub struct AdminView<T: Serialize> {
    pub listings: Vec<Owned<T>>,
    pub stats: ListingStats,
}

/// Build the admin dashboard for one vertical.
///
/// Only records owned by the caller appear, newest first. The stats block
/// is computed over that same subset, so the numbers always match the rows
/// shown next to them.
pub async fn admin_view<T>(
    state: &AppState,
    vertical: Vertical,
    seed: fn() -> Vec<T>,
    user: &AuthUser,
) -> AdminView<T>
where
    T: Listing + Serialize + DeserializeOwned,
{
    let (items, origin) = fetch_or_seed(
        state.upstream.as_deref(),
        vertical,
        seed,
        Some(&user.token),
    )
    .await;

    let mut mine = owned_by(items, user.user_id);
    mine.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    let stats = ListingStats::compute(&mine);

    tracing::debug!(
        vertical = %vertical,
        origin = ?origin,
        user_id = user.user_id,
        count = mine.len(),
        "Admin view"
    );

    AdminView {
        listings: mark_ownership(mine, Some(user.user_id)),
        stats,
    }
}

/// One row of the cross-vertical overview.
#[derive(Debug, Serialize)]
pub struct OverviewEntry {
    pub vertical: Vertical,
    /// Records owned by the caller.
    pub mine: usize,
    /// All records currently visible in the vertical.
    pub total: usize,
}

/// Count the caller's records and the overall catalog size across every
/// vertical, in [`Vertical::ALL`] order. The eight fetches run
/// concurrently.
pub async fn overview(state: &AppState, user: &AuthUser) -> Vec<OverviewEntry> {
    use backlot_core::catalog;

    let api = state.upstream.as_deref();
    let (assets, studios, talent, legal, education, tickets, investors, products) = tokio::join!(
        overview_entry(api, Vertical::Asset, catalog::asset::seed_assets, user),
        overview_entry(api, Vertical::Studio, catalog::studio::seed_studios, user),
        overview_entry(api, Vertical::Talent, catalog::talent::seed_talent, user),
        overview_entry(api, Vertical::Legal, catalog::legal::seed_legal, user),
        overview_entry(api, Vertical::Education, catalog::education::seed_courses, user),
        overview_entry(api, Vertical::Ticket, catalog::ticket::seed_tickets, user),
        overview_entry(api, Vertical::Investor, catalog::investor::seed_investors, user),
        overview_entry(api, Vertical::ProductService, catalog::product::seed_products, user),
    );

    vec![
        assets, studios, talent, legal, education, tickets, investors, products,
    ]
}

async fn overview_entry<T>(
    upstream: Option<&UpstreamApi>,
    vertical: Vertical,
    seed: fn() -> Vec<T>,
    user: &AuthUser,
) -> OverviewEntry
where
    T: Listing + DeserializeOwned,
{
    let (items, _) = fetch_or_seed(upstream, vertical, seed, Some(&user.token)).await;
    let total = items.len();
    let mine = owned_by(items, user.user_id).len();
    OverviewEntry {
        vertical,
        mine,
        total,
    }
}
