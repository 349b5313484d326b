//! Route guard: per-page-load access decisions and the saved return path.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page runs [`RouteGuard::protect`] when it loads. The
//! guard decides and records; executing the redirect, the denial notice,
//! and the stop-rendering behavior is the `Guarded` component's job. That
//! split keeps every decision testable against in-memory stores.
//!
//! DESIGN
//! ======
//! Decisions come back as [`GuardState`], not booleans, so the caller cannot
//! redirect to the wrong place or forget the denial notice: the state names
//! the target. The saved return path lives in tab-scoped storage, so two tabs
//! bounced to login resume independently.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::auth::policy::{self, FALLBACK_PATH, LOGIN_PATH};
use crate::auth::session::SessionStore;
use crate::util::storage::KeyValueStore;

/// Tab-scoped storage key for the path to resume after login.
pub const RETURN_KEY: &str = "mpet_return_url";

/// Notice shown when a logged-in user reaches a path outside their role.
pub const DENIED_NOTICE: &str =
    "Acesso negado! Você não tem permissão para acessar esta página.";

/// Outcome of one guard check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// The check has not run yet for this page load.
    #[default]
    Unchecked,
    /// Public path: render without a session.
    PublicOk,
    /// No session. The requested path was saved; go to login.
    Unauthenticated { login_path: &'static str },
    /// A session exists but its role does not list this path. Show the
    /// notice once, then leave for the role's own landing page.
    Unauthorized { notice: &'static str, redirect_to: &'static str },
    /// The session's role lists this path.
    Authorized,
}

impl GuardState {
    /// Whether the page may render its content. Everything else must stay
    /// blank until the redirect happens: denial is a redirect, never an
    /// inline degraded render.
    pub fn allows_render(&self) -> bool {
        matches!(self, GuardState::PublicOk | GuardState::Authorized)
    }
}

/// Canonicalize a raw browser pathname against the route table.
///
/// Served under a deployment prefix (`/mpet/adotante/match`), the canonical
/// trailing suffix is recovered by scanning for a known first segment.
/// Already-canonical paths only lose trailing slashes; anything
/// unrecognizable passes through unchanged and fails the membership checks
/// downstream.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return FALLBACK_PATH.to_owned();
    }
    let trimmed = trim_trailing_slashes(raw);
    if is_canonical(trimmed) {
        return trimmed.to_owned();
    }
    for (idx, _) in raw.match_indices('/') {
        let suffix = trim_trailing_slashes(&raw[idx..]);
        if is_canonical(suffix) {
            return suffix.to_owned();
        }
    }
    raw.to_owned()
}

fn trim_trailing_slashes(path: &str) -> &str {
    if path.len() > 1 {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() { "/" } else { trimmed }
    } else {
        path
    }
}

fn is_canonical(path: &str) -> bool {
    if path == policy::paths::HOME {
        return true;
    }
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    let root = rest.split('/').next().unwrap_or("");
    policy::is_known_root_segment(root)
}

/// Route guard over a session store and a tab-scoped return-path store.
#[derive(Clone, Copy, Debug)]
pub struct RouteGuard<S: KeyValueStore, R: KeyValueStore> {
    session: SessionStore<S>,
    returns: R,
}

impl<S: KeyValueStore, R: KeyValueStore> RouteGuard<S, R> {
    pub fn new(session: SessionStore<S>, returns: R) -> Self {
        Self { session, returns }
    }

    /// The session store this guard consults.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Run the access check for the current page load.
    ///
    /// The only storage effect is saving the return path on the
    /// unauthenticated branch. The caller executes whatever navigation the
    /// returned state names and must not render while `allows_render` is
    /// false.
    pub fn protect(&self, raw_path: &str) -> GuardState {
        let path = normalize(raw_path);
        if policy::is_public(&path) {
            return GuardState::PublicOk;
        }
        let Some(identity) = self.session.current() else {
            // Overwrites any earlier saved path: the latest bounce wins.
            self.returns.set(RETURN_KEY, &path);
            return GuardState::Unauthenticated { login_path: LOGIN_PATH };
        };
        if !policy::allowed_paths(identity.role).contains(&path.as_str()) {
            return GuardState::Unauthorized {
                notice: DENIED_NOTICE,
                redirect_to: policy::default_path(identity.role),
            };
        }
        GuardState::Authorized
    }

    /// Whether a programmatic navigation to `path` would be allowed now.
    /// No storage effects.
    pub fn can_access(&self, path: &str) -> bool {
        let path = normalize(path);
        if policy::is_public(&path) {
            return true;
        }
        self.session
            .role()
            .is_some_and(|role| policy::allowed_paths(role).contains(&path.as_str()))
    }

    /// Where to go after a successful login.
    ///
    /// Consumes the saved return path: it is cleared no matter what is
    /// returned, so a stale path can never replay on a later login. A
    /// missing slot, or one pointing back at the login page, falls back to
    /// the role's landing page.
    pub fn resume_after_login(&self) -> String {
        let saved = self.returns.get(RETURN_KEY);
        self.returns.remove(RETURN_KEY);

        let Some(role) = self.session.role() else {
            // Resume without a session means login never completed.
            return LOGIN_PATH.to_owned();
        };
        match saved {
            Some(path) if !path.is_empty() && path != LOGIN_PATH => path,
            _ => policy::default_path(role).to_owned(),
        }
    }
}
