//! Access-control core: roles, the role → route policy, the persisted
//! session, and the per-page-load route guard.
//!
//! DESIGN
//! ======
//! Authentication state and authorization rules live here, away from any
//! rendering concern, so every decision is testable against an in-memory
//! store. Components only execute what these modules decide.

pub mod guard;
pub mod policy;
pub mod role;
pub mod session;
