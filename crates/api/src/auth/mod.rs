//! Authentication: JWT configuration and token handling.

pub mod jwt;
