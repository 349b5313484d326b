//! Persisted session: the authenticated identity and its token.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login writes the identity and the opaque session token here;
//! the route guard and every page read them back on each page load. The
//! token is held as proof of authentication for the backend; the client
//! never inspects or validates it.
//!
//! ERROR HANDLING
//! ==============
//! Storage content is user-reachable (devtools), so reads never trust it:
//! an unreadable identity is logged and treated as "no session", and the
//! next successful login overwrites it. Nothing here panics.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::auth::role::Role;
use crate::net::types::{Identity, IdentityPatch};
use crate::util::storage::KeyValueStore;

/// Storage key for the serialized current identity.
pub const IDENTITY_KEY: &str = "mpet_current_user";

/// Storage key for the session token issued at login.
pub const TOKEN_KEY: &str = "mpet_session_token";

/// Session state over an injected key-value store.
///
/// Cloneable so the guard and pages can share one handle through context;
/// clones observe the same backing storage.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist `identity` and `token`, replacing any previous session.
    pub fn save(&self, identity: &Identity, token: &str) {
        let Ok(json) = serde_json::to_string(identity) else {
            leptos::logging::warn!("session save skipped: identity not serializable");
            return;
        };
        self.store.set(IDENTITY_KEY, &json);
        self.store.set(TOKEN_KEY, token);
    }

    /// The persisted identity, or `None` when absent or unreadable.
    pub fn current(&self) -> Option<Identity> {
        let raw = self.store.get(IDENTITY_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(err) => {
                leptos::logging::warn!(
                    "stored identity is unreadable, treating as logged out: {err}"
                );
                None
            }
        }
    }

    /// Whether a readable session exists.
    pub fn has_session(&self) -> bool {
        self.current().is_some()
    }

    /// Role of the current identity, if a session exists.
    pub fn role(&self) -> Option<Role> {
        self.current().map(|identity| identity.role)
    }

    /// The session token issued at login, if present.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Remove identity and token. Safe to call with no session.
    pub fn clear(&self) {
        self.store.remove(IDENTITY_KEY);
        self.store.remove(TOKEN_KEY);
    }

    /// Merge `patch` into the current identity and persist the result.
    ///
    /// Without a session this is a no-op: there is nothing to patch, and
    /// inventing an identity here would bypass login.
    pub fn update_identity(&self, patch: &IdentityPatch) {
        let Some(mut identity) = self.current() else {
            return;
        };
        identity.apply(patch);
        let Ok(json) = serde_json::to_string(&identity) else {
            leptos::logging::warn!("identity update skipped: not serializable");
            return;
        };
        self.store.set(IDENTITY_KEY, &json);
    }
}
