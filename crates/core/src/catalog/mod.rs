//! Vertical record types, creation payloads, and seed catalogs.
//!
//! One module per marketplace vertical. Each follows the same shape: the
//! record struct (what the backend stores and the pages render), a
//! `Create*` payload with derived validation, the vertical's fixed
//! category list, and a `seed_*` constructor returning the compiled-in
//! demo dataset served whenever the backend is unreachable or empty.
//!
//! Seeds are plain data. They are rebuilt on every call and never mutated
//! in place.

pub mod asset;
pub mod education;
pub mod investor;
pub mod legal;
pub mod product;
pub mod studio;
pub mod talent;
pub mod ticket;

use chrono::TimeZone;

use crate::types::Timestamp;

/// Fixed timestamp for seed records (midnight UTC). All arguments are
/// literal calendar dates, so the conversion cannot fail.
pub(crate) fn seed_date(year: i32, month: u32, day: u32) -> Timestamp {
    chrono::Utc
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("seed dates are valid calendar dates")
}

/// Join multiple searchable fields into one haystack string.
pub(crate) fn haystack(parts: &[&str]) -> String {
    parts.join(" ")
}
