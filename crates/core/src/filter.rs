//! The shared filter/sort pass behind every listing page.
//!
//! This is deliberately a linear scan over an in-memory `Vec`: datasets are
//! either the compiled-in seeds or one backend fetch, both small. There is
//! no indexing and no query planning here, and there should not be.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::listing::Listing;

// ---------------------------------------------------------------------------
// Filter and sort inputs
// ---------------------------------------------------------------------------

/// Filters applied to a listing dataset. All fields are optional; an unset
/// field filters nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingFilter {
    /// Free-text search. Empty or whitespace-only terms are ignored.
    pub search: Option<String>,
    /// Exact category match (case-insensitive). The literal `all` is the
    /// "every category" tab and is ignored.
    pub category: Option<String>,
    /// Substring match on the record's location (case-insensitive).
    pub location: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub min_rating: Option<f64>,
}

/// Sort orders offered by the listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most recently created first. The default everywhere.
    #[default]
    Newest,
    /// Cheapest first; records without a price go last.
    PriceLow,
    /// Most expensive first; records without a price go last.
    PriceHigh,
    /// Best rated first; unrated records go last.
    Rating,
    /// Title A-Z, case-insensitive.
    Alphabetical,
}

/// Default number of records per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Maximum number of records per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Limit/offset pagination, applied after filtering and sorting.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Page {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Page {
    /// Effective limit, clamped to `1..=MAX_PAGE_LIMIT`.
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT)
    }

    /// Effective offset, clamped to non-negative.
    pub fn offset(&self) -> i64 {
        clamp_offset(self.offset)
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// The filter/sort pass
// ---------------------------------------------------------------------------

/// Filter, sort, and paginate a dataset.
///
/// The result is always a subset of `items`: records are only ever dropped
/// or reordered, never synthesized. An empty filter with the default sort
/// returns the dataset newest-first.
pub fn process_filtered_data<T: Listing>(
    items: Vec<T>,
    filter: &ListingFilter,
    sort: SortKey,
    page: Page,
) -> Vec<T> {
    let mut kept: Vec<T> = items
        .into_iter()
        .filter(|item| matches_filter(item, filter))
        .collect();

    sort_listings(&mut kept, sort);

    let offset = page.offset() as usize;
    let limit = page.limit() as usize;
    if offset >= kept.len() {
        return Vec::new();
    }
    kept.drain(..offset);
    kept.truncate(limit);
    kept
}

/// Whether a single record passes every set filter.
pub fn matches_filter<T: Listing>(item: &T, filter: &ListingFilter) -> bool {
    if let Some(needle) = normalized_term(filter.search.as_deref()) {
        if !item.search_haystack().to_lowercase().contains(&needle) {
            return false;
        }
    }

    if let Some(category) = normalized_term(filter.category.as_deref()) {
        // "all" is the catch-all tab, not a real category.
        if category != "all" && item.category().to_lowercase() != category {
            return false;
        }
    }

    if let Some(location) = normalized_term(filter.location.as_deref()) {
        match item.location() {
            Some(loc) if loc.to_lowercase().contains(&location) => {}
            _ => return false,
        }
    }

    // Numeric filters exclude records that lack the field: a missing price
    // cannot be shown to fall inside a requested price band.
    if let Some(min) = filter.price_min {
        match item.price() {
            Some(p) if p >= min => {}
            _ => return false,
        }
    }
    if let Some(max) = filter.price_max {
        match item.price() {
            Some(p) if p <= max => {}
            _ => return false,
        }
    }
    if let Some(min_rating) = filter.min_rating {
        match item.rating() {
            Some(r) if r >= min_rating => {}
            _ => return false,
        }
    }

    true
}

/// Lowercase and trim a filter term; `None` for unset or blank input.
fn normalized_term(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Stable in-place sort by the requested key.
fn sort_listings<T: Listing>(items: &mut [T], sort: SortKey) {
    match sort {
        SortKey::Newest => items.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortKey::PriceLow => items.sort_by(|a, b| cmp_asc_missing_last(a.price(), b.price())),
        SortKey::PriceHigh => items.sort_by(|a, b| cmp_desc_missing_last(a.price(), b.price())),
        SortKey::Rating => items.sort_by(|a, b| cmp_desc_missing_last(a.rating(), b.rating())),
        SortKey::Alphabetical => {
            items.sort_by(|a, b| a.title().to_lowercase().cmp(&b.title().to_lowercase()))
        }
    }
}

/// Ascending order with absent values after all present ones.
fn cmp_asc_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending order with absent values after all present ones.
fn cmp_desc_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
