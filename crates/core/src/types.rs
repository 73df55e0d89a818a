/// Listing identifiers are assigned by the external marketplace backend.
/// Seed records use fixed small values.
pub type ListingId = i64;

/// User identifiers come from the backend's auth service (JWT `sub` claim).
pub type UserId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
