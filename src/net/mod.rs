//! REST client for the MPet backend: wire DTOs and endpoint wrappers.

pub mod api;
pub mod types;
