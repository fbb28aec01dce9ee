//! # Session persistence
//!
//! The client keeps one [`Session`] — the pairing of the authenticated user's
//! profile and the opaque bearer token — and mirrors it into a key/value
//! [`SessionStore`] so a page reload restores the same authenticated state.
//!
//! Two entries are persisted, matching what the views write:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] | the bearer token, as-is |
//! | [`USER_KEY`] | the [`UserProfile`] serialized to JSON |
//!
//! [`SessionBridge`] is the only code that touches these keys. A session only
//! restores whole: a token without a user record (or the reverse), or a user
//! record that no longer decodes, clears both entries and restores to
//! unauthenticated instead of crashing or half-hydrating.

use crate::models::UserProfile;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user record.
pub const USER_KEY: &str = "user";

/// Synchronous key/value storage for session state.
///
/// Browser `localStorage` is synchronous, so the trait is too. Implementations
/// live in sibling modules ([`crate::memory`], [`crate::local`]).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// An authenticated session: user profile plus opaque bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

/// Mirrors the session between in-memory state and a [`SessionStore`].
pub struct SessionBridge<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionBridge<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted session, if any.
    pub fn restore(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let raw_user = self.store.get(USER_KEY);
        match (token, raw_user) {
            (Some(token), Some(raw_user)) => match serde_json::from_str(&raw_user) {
                Ok(user) => Some(Session { user, token }),
                Err(_) => {
                    // corrupt record: start unauthenticated
                    self.clear();
                    None
                }
            },
            (None, None) => None,
            // one half without the other is a stale leftover
            _ => {
                self.clear();
                None
            }
        }
    }

    /// Persist both halves of the session.
    pub fn save(&self, session: &Session) {
        self.store.set(TOKEN_KEY, &session.token);
        self.save_user(&session.user);
    }

    /// Persist the user record alone. Favorites mutations touch only it.
    pub fn save_user(&self, user: &UserProfile) {
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &json);
        }
    }

    /// Drop both entries.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Course;

    fn sample_session() -> Session {
        Session {
            user: UserProfile {
                id: "u1".to_string(),
                username: "pete".to_string(),
                fullname: "Peter Parker".to_string(),
                favorite_courses: vec![Course {
                    id: 7,
                    name: "Pebble Beach Golf Links".to_string(),
                    location: "Monterey County".to_string(),
                    state: "California".to_string(),
                    holes: 18,
                    par: 72,
                    designer: "Jack Neville & Douglas Grant".to_string(),
                    rating: 4.8,
                }],
            },
            token: "tok-123".to_string(),
        }
    }

    #[test]
    fn test_save_then_restore_roundtrip() {
        let store = MemoryStore::new();
        let bridge = SessionBridge::new(store);

        assert!(bridge.restore().is_none());

        let session = sample_session();
        bridge.save(&session);
        assert_eq!(bridge.restore(), Some(session));
    }

    #[test]
    fn test_restore_shares_state_with_a_fresh_bridge() {
        // two bridges over the same backing store see the same session,
        // which is what a reload does on the web
        let store = MemoryStore::new();
        let session = sample_session();
        SessionBridge::new(store.clone()).save(&session);

        let restored = SessionBridge::new(store).restore();
        assert_eq!(restored, Some(session));
    }

    #[test]
    fn test_corrupt_user_record_restores_to_unauthenticated() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok-123");
        store.set(USER_KEY, "{not json");

        let bridge = SessionBridge::new(store.clone());
        assert!(bridge.restore().is_none());
        // both entries are gone afterwards
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_token_without_user_is_discarded() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok-123");

        let bridge = SessionBridge::new(store.clone());
        assert!(bridge.restore().is_none());
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "");
        store.set(USER_KEY, "{}");

        assert!(SessionBridge::new(store).restore().is_none());
    }

    #[test]
    fn test_save_user_leaves_token_alone() {
        let store = MemoryStore::new();
        let bridge = SessionBridge::new(store.clone());
        let mut session = sample_session();
        bridge.save(&session);

        session.user.remove_favorite(7);
        bridge.save_user(&session.user);

        let restored = bridge.restore().unwrap();
        assert_eq!(restored.token, "tok-123");
        assert!(restored.user.favorite_courses.is_empty());
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let store = MemoryStore::new();
        let bridge = SessionBridge::new(store.clone());
        bridge.save(&sample_session());

        bridge.clear();
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
        assert!(bridge.restore().is_none());
    }
}
