//! HTTP client for the marketplace backend.
//!
//! The API server treats the backend as optional: when it is reachable
//! its catalog is authoritative, and when it is not the server falls
//! back to built-in seed data. This crate only does the talking; the
//! fallback policy lives with the caller.

pub mod client;
pub mod error;

pub use client::UpstreamApi;
pub use error::UpstreamError;
