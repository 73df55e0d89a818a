//! Shared query-string parameters for the listing pages.

use backlot_core::filter::{ListingFilter, Page, SortKey};
use serde::Deserialize;

/// Query parameters accepted by every `GET /{resource}` endpoint.
///
/// All fields are optional; an omitted field filters nothing and the sort
/// defaults to newest-first. Unknown `sort` values are rejected by the
/// `Query` extractor with a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub sort: SortKey,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListingQuery {
    /// Split into the core filter/sort/page inputs.
    pub fn into_parts(self) -> (ListingFilter, SortKey, Page) {
        let filter = ListingFilter {
            search: self.search,
            category: self.category,
            location: self.location,
            price_min: self.price_min,
            price_max: self.price_max,
            min_rating: self.min_rating,
        };
        let page = Page {
            limit: self.limit,
            offset: self.offset,
        };
        (filter, self.sort, page)
    }
}
