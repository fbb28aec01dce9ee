//! # localStorage session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the two session entries in the browser's
//! `localStorage` via `web-sys`, so an authenticated session survives reloads.
//!
//! ## Error handling
//!
//! All trait methods silently swallow storage errors (returning `None` for
//! reads, doing nothing for writes). A blocked or unavailable `localStorage`
//! degrades to "no stored session" rather than crashing; the server remains
//! the authority for everything except the cached session copy.

use crate::session::SessionStore;

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
