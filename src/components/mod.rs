//! Reusable UI components.
//!
//! DESIGN
//! ======
//! Components execute decisions made elsewhere: `Guarded` runs the route
//! guard, `NavMenu` renders the role's access descriptor, the rest is
//! presentation. None of them owns business rules.

pub mod empty_state;
pub mod guarded;
pub mod loading;
pub mod nav_menu;
pub mod pet_card;
pub mod public_nav;
pub mod shell;
pub mod toast;
