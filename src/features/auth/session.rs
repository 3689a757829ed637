//! Client-side mirror of the signed-in user's profile. The session itself is an
//! `HttpOnly` cookie owned by the browser; this cache only feeds the UI and is
//! never used for access decisions.

use super::types::UserProfile;
use crate::app_lib::KeyValueStore;
use tracing::warn;

/// Local storage key holding the cached profile JSON.
pub const USER_KEY: &str = "user";

pub trait SessionCache {
    fn read(&self) -> Option<UserProfile>;
    fn write(&self, profile: &UserProfile);
    fn clear(&self);
}

/// [`SessionCache`] persisted as JSON in a key/value store.
#[derive(Clone, Debug, Default)]
pub struct StoredSession<S> {
    store: S,
}

impl<S: KeyValueStore> StoredSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> SessionCache for StoredSession<S> {
    fn read(&self) -> Option<UserProfile> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(error = %err, "discarding unreadable cached profile");
                self.store.remove(USER_KEY);
                None
            }
        }
    }

    fn write(&self, profile: &UserProfile) {
        let result = serde_json::to_string(profile)
            .map_err(|err| err.to_string())
            .and_then(|json| {
                self.store
                    .set(USER_KEY, &json)
                    .map_err(|err| err.to_string())
            });
        if let Err(err) = result {
            warn!(error = %err, "failed to cache user profile");
        }
    }

    fn clear(&self) {
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::test_support::MemoryStore;
    use serde_json::{Map, Value, json};

    fn profile() -> UserProfile {
        UserProfile {
            username: "alice".to_string(),
            email: Some("alice@example.com".to_string()),
            display_name: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn write_read_clear() {
        let store = MemoryStore::default();
        let cache = StoredSession::new(store.clone());
        assert_eq!(cache.read(), None);

        cache.write(&profile());
        assert_eq!(cache.read(), Some(profile()));
        assert_eq!(
            store.get(USER_KEY).as_deref(),
            Some(r#"{"username":"alice","email":"alice@example.com"}"#)
        );

        cache.clear();
        assert_eq!(store.get(USER_KEY), None);
    }

    #[test]
    fn unknown_profile_fields_survive_the_cache() {
        let store = MemoryStore::default();
        let cache = StoredSession::new(store.clone());
        let mut stored = profile();
        stored.extra.insert("avatarUrl".to_string(), json!("a.png"));

        cache.write(&stored);

        let raw: Value = serde_json::from_str(&store.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(
            raw,
            json!({"username": "alice", "email": "alice@example.com", "avatarUrl": "a.png"})
        );
        assert_eq!(cache.read(), Some(stored));
    }

    #[test]
    fn corrupt_entry_is_dropped() {
        let store = MemoryStore::default();
        store.set(USER_KEY, "{not json").unwrap();
        let cache = StoredSession::new(store.clone());

        assert_eq!(cache.read(), None);
        assert_eq!(store.get(USER_KEY), None);
    }
}
