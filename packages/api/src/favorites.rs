//! # Favorites service — screen-side state over the favorites store
//!
//! [`FavoritesService`] owns the in-memory snapshot a screen renders plus the
//! two-step confirmation gate used when toggling from the catalog:
//!
//! 1. [`request_toggle`](FavoritesService::request_toggle) stashes the plant
//!    and the screen shows a confirmation dialog;
//! 2. [`confirm_pending`](FavoritesService::confirm_pending) applies the
//!    toggle, or [`cancel_pending`](FavoritesService::cancel_pending) drops
//!    it. Either way the pending slot is cleared, so the dialog never
//!    reappears for a stale choice.
//!
//! Removal from the favorites list itself ([`remove`](FavoritesService::remove))
//! is immediate — that screen has no dialog.
//!
//! Every mutation is persist-then-commit: the new collection is written to
//! the backend first, and only on success does it replace the snapshot. A
//! failed write leaves both the snapshot and the stored value as they were,
//! and the error reaches the screen so it can tell the user.
//!
//! Snapshots can go stale: two services over the same backend diverge until
//! the next [`refresh`](FavoritesService::refresh). Screens refresh on focus,
//! which is what reconciles them.

use store::{Favorites, FavoritesStore, KeyValueStore, PlantRecord};

use crate::error::ApiError;

/// Favorites state for one screen: a snapshot, its backing store, and the
/// pending confirmation, if any.
pub struct FavoritesService<S: KeyValueStore> {
    store: FavoritesStore<S>,
    favorites: Favorites,
    pending: Option<PlantRecord>,
}

impl<S: KeyValueStore> FavoritesService<S> {
    /// Service over `backend` with an empty snapshot; call
    /// [`refresh`](Self::refresh) to populate it.
    pub fn new(backend: S) -> Self {
        Self {
            store: FavoritesStore::new(backend),
            favorites: Favorites::new(),
            pending: None,
        }
    }

    /// Reload the snapshot from storage. Screens call this on focus.
    pub async fn refresh(&mut self) -> &Favorites {
        self.favorites = self.store.load().await;
        &self.favorites
    }

    /// The current snapshot.
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    /// Snapshot entries matching `query` by common name; blank matches all.
    pub fn search(&self, query: &str) -> Vec<&PlantRecord> {
        self.favorites.search(query).collect()
    }

    /// Stage a toggle for confirmation. Replaces any earlier pending choice.
    pub fn request_toggle(&mut self, plant: PlantRecord) {
        self.pending = Some(plant);
    }

    /// The plant awaiting confirmation, if any.
    pub fn pending(&self) -> Option<&PlantRecord> {
        self.pending.as_ref()
    }

    /// Drop the pending choice without touching the collection.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Apply the pending toggle and persist the result.
    ///
    /// With nothing pending this is a no-op. The pending slot is cleared
    /// before the write, so a failure leaves no dialog to re-confirm.
    pub async fn confirm_pending(&mut self) -> Result<(), ApiError> {
        let Some(plant) = self.pending.take() else {
            return Ok(());
        };
        let next = self.favorites.toggle(plant);
        self.commit(next).await
    }

    /// Remove a plant immediately, no confirmation.
    pub async fn remove(&mut self, id: i64) -> Result<(), ApiError> {
        let next = self.favorites.remove(id);
        self.commit(next).await
    }

    async fn commit(&mut self, next: Favorites) -> Result<(), ApiError> {
        if let Err(e) = self.store.persist(&next).await {
            tracing::error!("Failed to persist favorites: {}", e);
            return Err(e.into());
        }
        self.favorites = next;
        Ok(())
    }
}
