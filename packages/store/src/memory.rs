use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and ephemeral fallback.
///
/// Clones share the same underlying map, so two stores created from one
/// another behave like two screens talking to the same device storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::{Favorites, FavoritesStore, FAVORITES_KEY};
    use crate::models::{PlantRecord, UserSession};
    use crate::session::{SessionStore, SESSION_KEY};

    fn plant(id: i64, common_name: &str) -> PlantRecord {
        PlantRecord {
            id,
            common_name: Some(common_name.to_string()),
            scientific_name: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_get_set_remove() {
        let store = MemoryStore::new();

        assert!(store.get("user").await.unwrap().is_none());

        store.set("user", "{}".to_string()).await.unwrap();
        assert_eq!(store.get("user").await.unwrap().as_deref(), Some("{}"));

        store.remove("user").await.unwrap();
        assert!(store.get("user").await.unwrap().is_none());

        // Removing an absent key is fine.
        store.remove("user").await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("favorites", "[]".to_string()).await.unwrap();
        assert_eq!(other.get("favorites").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_load_empty_when_nothing_stored() {
        let favorites = FavoritesStore::new(MemoryStore::new());
        assert!(favorites.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_persist_then_load_roundtrip() {
        let store = FavoritesStore::new(MemoryStore::new());

        let favorites = Favorites::new()
            .add(plant(1, "Rose"))
            .add(plant(2, "Tulip"));
        store.persist(&favorites).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded, favorites);
    }

    #[tokio::test]
    async fn test_persist_overwrites_previous_value() {
        let store = FavoritesStore::new(MemoryStore::new());

        store
            .persist(&Favorites::new().add(plant(1, "Rose")))
            .await
            .unwrap();
        store
            .persist(&Favorites::new().add(plant(2, "Tulip")))
            .await
            .unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.len(), 1);
        assert!(loaded.is_favorite(2));
        assert!(!loaded.is_favorite(1));
    }

    #[tokio::test]
    async fn test_corrupt_value_loads_as_empty() {
        let backend = MemoryStore::new();
        backend
            .set(FAVORITES_KEY, "not json at all{{".to_string())
            .await
            .unwrap();

        let favorites = FavoritesStore::new(backend).load().await;
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn test_two_stores_reconcile_on_reload() {
        // Two screens over the same device storage: one persists a change,
        // the other sees it on its next focus load.
        let backend = MemoryStore::new();
        let home = FavoritesStore::new(backend.clone());
        let favorites_screen = FavoritesStore::new(backend);

        let saved = home.load().await.add(plant(7, "Monstera"));
        home.persist(&saved).await.unwrap();

        let reloaded = favorites_screen.load().await;
        assert!(reloaded.is_favorite(7));
        assert_eq!(reloaded, saved);
    }

    #[tokio::test]
    async fn test_session_save_load_clear() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.load().await.is_none());

        let session = UserSession {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            image: "https://randomuser.me/api/portraits/men/1.jpg".to_string(),
        };
        sessions.save(&session).await.unwrap();
        assert_eq!(sessions.load().await, Some(session));

        sessions.clear().await.unwrap();
        assert!(sessions.load().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_session_loads_as_none() {
        let backend = MemoryStore::new();
        backend
            .set(SESSION_KEY, "][".to_string())
            .await
            .unwrap();

        assert!(SessionStore::new(backend).load().await.is_none());
    }
}
