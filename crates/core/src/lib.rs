//! Domain layer for the Backlot marketplace.
//!
//! Everything in this crate is pure and synchronous: vertical record types
//! with their seed catalogs, the shared filter/sort pass applied to every
//! listing page, ownership flagging, admin aggregation, and creation-payload
//! validation. Network and storage concerns live in the sibling crates.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod listing;
pub mod ownership;
pub mod stats;
pub mod types;
pub mod validation;
pub mod vertical;

pub use error::CoreError;
pub use filter::{process_filtered_data, ListingFilter, Page, SortKey};
pub use listing::Listing;
pub use ownership::{mark_ownership, owned_by, Owned};
pub use stats::ListingStats;
pub use types::{ListingId, Timestamp, UserId};
pub use vertical::Vertical;
