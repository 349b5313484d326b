//! Key-value storage over the browser Web Storage API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session (identity + token) and the saved return path live in
//! origin-scoped browser storage. Everything above this module talks to the
//! [`KeyValueStore`] trait, so session and guard logic run against
//! [`MemoryStore`] in tests and against [`WebStorage`] in the browser.
//!
//! DESIGN
//! ======
//! The trait keeps the synchronous, stringly-typed semantics of
//! `localStorage`: infallible reads that answer `None` for anything missing,
//! writes that silently replace. Outside the browser (SSR) `WebStorage`
//! degrades to a no-op store, mirroring how the rest of the hydrate-gated
//! code behaves on the server.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String-keyed storage with Web Storage semantics.
pub trait KeyValueStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// Which browser storage area a [`WebStorage`] handle targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// `localStorage`: survives the tab, scoped to the origin.
    Local,
    /// `sessionStorage`: dropped when the tab closes.
    Session,
}

/// Browser-backed store over `localStorage` or `sessionStorage`.
#[derive(Clone, Copy, Debug)]
pub struct WebStorage {
    area: StorageArea,
}

impl WebStorage {
    /// Handle on `localStorage`.
    pub fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    /// Handle on `sessionStorage`.
    pub fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    #[cfg(feature = "hydrate")]
    fn backing(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.area {
            StorageArea::Local => window.local_storage().ok().flatten(),
            StorageArea::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.backing()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.area, key);
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        if let Some(storage) = self.backing() {
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.area, key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        if let Some(storage) = self.backing() {
            let _ = storage.remove_item(key);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.area, key);
        }
    }
}

/// In-memory store for tests and non-browser hosts.
///
/// Clones share the same backing map, matching how two [`WebStorage`] handles
/// on the same area see each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
