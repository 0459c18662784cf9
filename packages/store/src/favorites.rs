//! # Favorites — the saved-plants collection and its persistence
//!
//! This module is the core of Verdant's storage layer, split into two pieces:
//!
//! [`Favorites`] is the collection itself: an ordered list of
//! [`PlantRecord`]s, unique by catalog id, insertion order preserved. Every
//! mutation is functional — it takes `&self` and returns a new collection —
//! so a screen holding an earlier snapshot never sees it change under its
//! feet, and a caller can keep the old value until the new one is safely on
//! disk.
//!
//! [`FavoritesStore`] reads and writes the collection under the well-known
//! [`FAVORITES_KEY`], serialized as a bare JSON array. It works against any
//! [`KeyValueStore`] backend, so the same logic runs on an in-memory store
//! (tests), the filesystem (desktop/mobile), or IndexedDB (web).
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`is_favorite`](Favorites::is_favorite) | Membership by catalog id. Linear scan; the list is human-sized. |
//! | [`add`](Favorites::add) | Appends at the end. Adding an id already present is a no-op. |
//! | [`remove`](Favorites::remove) | Drops every entry with the id. Removing an absent id is a no-op. |
//! | [`toggle`](Favorites::toggle) | `remove` if present, else `add`. |
//! | [`search`](Favorites::search) | Case-insensitive substring match on the common name. A blank query yields the whole collection in order. |
//! | [`FavoritesStore::load`] | Read-through load. Absent, unreadable, or unparsable state degrades to an empty collection. |
//! | [`FavoritesStore::persist`] | Serializes the full collection and overwrites the stored value. Failures propagate. |
//!
//! The load/persist pair carries the consistency contract: callers persist a
//! newly-computed collection and only then treat it as current, so in-memory
//! and durable state never diverge past a single failed operation.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::PlantRecord;

/// Storage key holding the favorites array.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered collection of saved plants, unique by catalog id.
///
/// Serialized as a bare JSON array of [`PlantRecord`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    plants: Vec<PlantRecord>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Saved plants in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PlantRecord> {
        self.plants.iter()
    }

    /// Whether a plant with this catalog id is saved.
    pub fn is_favorite(&self, id: i64) -> bool {
        self.plants.iter().any(|p| p.id == id)
    }

    /// New collection with `plant` appended at the end.
    ///
    /// Adding an id that is already saved returns the collection unchanged.
    pub fn add(&self, plant: PlantRecord) -> Self {
        if self.is_favorite(plant.id) {
            return self.clone();
        }
        let mut plants = self.plants.clone();
        plants.push(plant);
        Self { plants }
    }

    /// New collection without any entry for `id`.
    pub fn remove(&self, id: i64) -> Self {
        let plants = self
            .plants
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        Self { plants }
    }

    /// Remove the plant if it is saved, otherwise add it.
    pub fn toggle(&self, plant: PlantRecord) -> Self {
        if self.is_favorite(plant.id) {
            self.remove(plant.id)
        } else {
            self.add(plant)
        }
    }

    /// Saved plants whose common name contains `query`, case-insensitively.
    ///
    /// A blank query matches everything. Entries without a common name never
    /// match a non-blank query. The iterator borrows the collection and is
    /// recomputed per call; nothing is cached between searches.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a PlantRecord> {
        let needle = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        self.plants.iter().filter(move |p| match &needle {
            None => true,
            Some(q) => p
                .common_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(q)),
        })
    }
}

/// Reads and writes the favorites collection under [`FAVORITES_KEY`].
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored collection.
    ///
    /// An absent key, a backend that cannot read, and a value that fails to
    /// parse all yield an empty collection: no saved list and an unreadable
    /// one look the same to callers.
    pub async fn load(&self) -> Favorites {
        let Ok(Some(raw)) = self.store.get(FAVORITES_KEY).await else {
            return Favorites::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Overwrite the stored collection with `favorites`.
    pub async fn persist(&self, favorites: &Favorites) -> Result<(), StoreError> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: i64, common_name: &str) -> PlantRecord {
        PlantRecord {
            id,
            common_name: Some(common_name.to_string()),
            scientific_name: None,
            image_url: None,
        }
    }

    fn unnamed(id: i64) -> PlantRecord {
        PlantRecord {
            id,
            common_name: None,
            scientific_name: None,
            image_url: None,
        }
    }

    fn ids(favorites: &Favorites) -> Vec<i64> {
        favorites.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_add_appends_and_marks_favorite() {
        let favorites = Favorites::new();
        assert!(!favorites.is_favorite(1));

        let favorites = favorites.add(plant(1, "Rose"));
        assert!(favorites.is_favorite(1));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_add_is_idempotent() {
        let favorites = Favorites::new()
            .add(plant(1, "Rose"))
            .add(plant(1, "Rose"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let favorites = Favorites::new()
            .add(plant(3, "Fern"))
            .add(plant(1, "Rose"))
            .add(plant(2, "Tulip"));
        assert_eq!(ids(&favorites), vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_then_is_favorite_false() {
        let favorites = Favorites::new().add(plant(1, "Rose"));
        let favorites = favorites.remove(1);
        assert!(!favorites.is_favorite(1));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let favorites = Favorites::new().add(plant(1, "Rose"));
        let removed = favorites.remove(42);
        assert_eq!(removed, favorites);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let favorites = Favorites::new()
            .add(plant(1, "Rose"))
            .add(plant(2, "Tulip"));

        let toggled_twice = favorites
            .toggle(plant(2, "Tulip"))
            .toggle(plant(2, "Tulip"));

        let mut before = ids(&favorites);
        let mut after = ids(&toggled_twice);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_updates_leave_the_original_untouched() {
        let original = Favorites::new().add(plant(1, "Rose"));

        let _ = original.add(plant(2, "Tulip"));
        let _ = original.remove(1);
        let _ = original.toggle(plant(1, "Rose"));

        assert_eq!(ids(&original), vec![1]);
    }

    #[test]
    fn test_search_blank_query_returns_all_in_order() {
        let favorites = Favorites::new()
            .add(plant(2, "Tulip"))
            .add(plant(1, "Rose"));

        let all: Vec<i64> = favorites.search("").map(|p| p.id).collect();
        assert_eq!(all, vec![2, 1]);

        let all: Vec<i64> = favorites.search("   ").map(|p| p.id).collect();
        assert_eq!(all, vec![2, 1]);
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let favorites = Favorites::new()
            .add(plant(1, "Rose"))
            .add(plant(2, "Tulip"));

        let hits: Vec<i64> = favorites.search("TU").map(|p| p.id).collect();
        assert_eq!(hits, vec![2]);

        let hits: Vec<i64> = favorites.search("os").map(|p| p.id).collect();
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let favorites = Favorites::new().add(plant(1, "Rose"));
        assert_eq!(favorites.search("zz").count(), 0);
    }

    #[test]
    fn test_search_skips_entries_without_common_name() {
        let favorites = Favorites::new()
            .add(plant(1, "Rose"))
            .add(unnamed(2));

        let hits: Vec<i64> = favorites.search("ros").map(|p| p.id).collect();
        assert_eq!(hits, vec![1]);

        // Blank still includes the unnamed entry.
        assert_eq!(favorites.search("").count(), 2);
    }

    #[test]
    fn test_catalog_scenario() {
        let favorites = Favorites::new().add(plant(1, "Rose"));

        let favorites = favorites.add(plant(2, "Tulip"));
        assert_eq!(ids(&favorites), vec![1, 2]);

        let favorites = favorites.remove(1);
        assert_eq!(ids(&favorites), vec![2]);

        let hits: Vec<i64> = favorites.search("tu").map(|p| p.id).collect();
        assert_eq!(hits, vec![2]);
        assert_eq!(favorites.search("zz").count(), 0);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let favorites = Favorites::new().add(plant(1, "Rose"));
        let json = serde_json::to_string(&favorites).unwrap();
        assert!(json.starts_with('['), "expected bare array, got {json}");

        let parsed: Favorites = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, favorites);
    }
}
