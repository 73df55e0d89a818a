//! The [`Listing`] trait implemented by every vertical's record type.
//!
//! The generic layers (filtering, ownership, stats) only ever see this
//! trait; the concrete field layouts stay in [`crate::catalog`].

use crate::types::{ListingId, Timestamp, UserId};

/// Common surface of a marketplace record.
///
/// Fields that not every vertical carries (price, rating, location) are
/// optional here; filters treat an absent value as a non-match and sorts
/// push absent values to the end.
pub trait Listing {
    fn id(&self) -> ListingId;

    /// Owning user, when the record has one. Seed records predating
    /// account linking may have none.
    fn owner_id(&self) -> Option<UserId>;

    /// Primary display name (title, studio name, event name, ...).
    fn title(&self) -> &str;

    fn category(&self) -> &str;

    fn location(&self) -> Option<&str>;

    /// The vertical's "price" in its own unit: sale price, day rate,
    /// hourly rate, ticket price, or minimum investment.
    fn price(&self) -> Option<f64>;

    fn rating(&self) -> Option<f64>;

    fn created_at(&self) -> Timestamp;

    /// Concatenated text searched by the free-text filter. Implementations
    /// include every field a person would expect search to cover (title,
    /// description, tags, location, ...). Case does not matter; the filter
    /// lowercases both sides.
    fn search_haystack(&self) -> String;
}
