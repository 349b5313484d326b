//! Reactive mirror of the persisted session for rendering.
//!
//! The session store stays the source of truth for guard decisions; this
//! mirror exists so menus and pages re-render on login and logout without
//! re-reading storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;

/// Snapshot of the authenticated identity plus its load status.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
    /// True until the app shell has read the persisted session once.
    /// During SSR it stays true, since storage only exists in the browser.
    pub loading: bool,
}

impl SessionState {
    /// The state before the first storage read.
    pub fn booting() -> Self {
        Self { identity: None, loading: true }
    }

    /// The state after a storage read (or after login/logout).
    pub fn loaded(identity: Option<Identity>) -> Self {
        Self { identity, loading: false }
    }

    /// Display name of the current user, if any.
    pub fn nome(&self) -> Option<String> {
        self.identity.as_ref().map(|identity| identity.nome.clone())
    }
}
