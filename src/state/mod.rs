//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Plain data structs wrapped in `RwSignal`s and provided via context by the
//! app shell. Split by domain so components depend on small focused models.

pub mod deck;
pub mod session;
pub mod ui;
