//! # IndexedDB key-value store — browser-side persistence
//!
//! [`IdbStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It persists the session and favorites JSON documents into the
//! browser's IndexedDB via the [`rexie`] crate (a Rust wrapper around the
//! IndexedDB API), so saved plants survive page reloads.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"verdant"` (version 1) with one object
//! store:
//!
//! | IndexedDB store | Key | Value |
//! |-----------------|-----|-------|
//! | `"kv"` | storage key (e.g. `"favorites"`) | JSON document as a string |
//!
//! ## Connection management
//!
//! `IdbStore` is a zero-size struct (`Clone`-friendly) that opens a fresh
//! [`Rexie`] connection on every operation. `Rexie` does not implement
//! `Clone`, and reopening is cheap because the browser caches IndexedDB
//! connections internally.
//!
//! ## Error handling
//!
//! Every rexie failure maps to [`StoreError::Backend`]. The callers decide
//! what degrades: the domain stores turn read failures into empty state,
//! while write failures travel up to the screen that asked for the save.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

const DB_NAME: &str = "verdant";
const DB_VERSION: u32 = 1;
const KV_STORE: &str = "kv";

/// IndexedDB-backed KeyValueStore for the web platform.
#[derive(Clone, Default)]
pub struct IdbStore;

impl IdbStore {
    pub fn new() -> Self {
        Self
    }

    async fn open_db(&self) -> Result<Rexie, StoreError> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(KV_STORE))
            .build()
            .await
            .map_err(|e| StoreError::backend(e.to_string()))
    }
}

impl KeyValueStore for IdbStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadOnly)
            .map_err(|e| StoreError::backend(e.to_string()))?;
        let store = tx
            .store(KV_STORE)
            .map_err(|e| StoreError::backend(e.to_string()))?;

        let value = store
            .get(JsValue::from_str(key))
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;

        let Some(js_val) = value else {
            return Ok(None);
        };
        let text: String = serde_wasm_bindgen::from_value(js_val)
            .map_err(|e| StoreError::backend(e.to_string()))?;
        Ok(Some(text))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadWrite)
            .map_err(|e| StoreError::backend(e.to_string()))?;
        let store = tx
            .store(KV_STORE)
            .map_err(|e| StoreError::backend(e.to_string()))?;

        let js_value = serde_wasm_bindgen::to_value(&value)
            .map_err(|e| StoreError::backend(e.to_string()))?;
        store
            .put(&js_value, Some(&JsValue::from_str(key)))
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;
        tx.done()
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadWrite)
            .map_err(|e| StoreError::backend(e.to_string()))?;
        let store = tx
            .store(KV_STORE)
            .map_err(|e| StoreError::backend(e.to_string()))?;

        store
            .delete(JsValue::from_str(key))
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;
        tx.done()
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;
        Ok(())
    }
}
