//! Durable session record: who is signed in on this device.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::UserSession;

/// Storage key holding the active session.
pub const SESSION_KEY: &str = "user";

/// Reads and writes the signed-in user under [`SESSION_KEY`].
///
/// Same read-after-write contract as [`crate::FavoritesStore`]: a save is
/// awaited before the sign-in is considered complete, and an absent or
/// unreadable session means "nobody is signed in", never an error.
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored session, or `None` when absent or unreadable.
    pub async fn load(&self) -> Option<UserSession> {
        let raw = self.store.get(SESSION_KEY).await.ok()??;
        serde_json::from_str(&raw).ok()
    }

    /// Replace the stored session.
    pub async fn save(&self, session: &UserSession) -> Result<(), StoreError> {
        let raw = serde_json::to_string(session)?;
        self.store.set(SESSION_KEY, raw).await
    }

    /// Sign out: remove the stored session.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(SESSION_KEY).await
    }
}
