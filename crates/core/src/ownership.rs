//! Ownership flagging for browse responses and admin views.

use serde::Serialize;

use crate::listing::Listing;
use crate::types::UserId;

/// A record annotated with whether the viewing user owns it.
///
/// Serializes as the record's own fields plus an `is_owner` boolean, which
/// is what the listing pages consume to decide whether to show edit and
/// delete affordances.
#[derive(Debug, Clone, Serialize)]
pub struct Owned<T: Serialize> {
    #[serde(flatten)]
    pub listing: T,
    pub is_owner: bool,
}

/// Annotate every record with an ownership flag for the given viewer.
///
/// `is_owner` is true exactly when the record has an owner and that owner
/// is the viewer. Anonymous viewers and ownerless records always get
/// `false`.
pub fn mark_ownership<T: Listing + Serialize>(
    items: Vec<T>,
    viewer: Option<UserId>,
) -> Vec<Owned<T>> {
    items
        .into_iter()
        .map(|listing| {
            let is_owner = match (viewer, listing.owner_id()) {
                (Some(v), Some(o)) => v == o,
                _ => false,
            };
            Owned { listing, is_owner }
        })
        .collect()
}

/// Keep only the records owned by `owner`.
pub fn owned_by<T: Listing>(items: Vec<T>, owner: UserId) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.owner_id() == Some(owner))
        .collect()
}
