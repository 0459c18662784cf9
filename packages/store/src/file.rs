//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] implementation for desktop and
//! mobile: each key becomes one JSON file under a base directory, so session
//! and favorites survive app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── user.json          # active session
//! └── favorites.json     # saved plants
//! ```
//!
//! Writes land in a temporary file first and are renamed into place; a crash
//! mid-write leaves the previous value intact instead of a truncated file.
//!
//! ## Platform data directories
//!
//! [`FileStore::for_app`] uses [`dirs::data_dir()`] for a platform-appropriate
//! base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/<app>/` |
//! | Linux | `~/.local/share/<app>/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\<app>\` |
//! | Android | App-internal storage (via `dirs`) |

use std::path::PathBuf;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at the platform data directory for the named app.
    pub fn for_app(app: &str) -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app);
        Self::new(base)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let tmp = self.base.join(format!(".{key}-{}.tmp", std::process::id()));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, self.key_path(key))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::{Favorites, FavoritesStore};
    use crate::models::PlantRecord;
    use tempfile::TempDir;

    fn plant(id: i64, common_name: &str) -> PlantRecord {
        PlantRecord {
            id,
            common_name: Some(common_name.to_string()),
            scientific_name: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();

        let store = FavoritesStore::new(FileStore::new(dir.path().to_path_buf()));
        let favorites = Favorites::new().add(plant(1, "Rose"));
        store.persist(&favorites).await.unwrap();

        // Re-open from the same directory, as a fresh app launch would.
        let store2 = FavoritesStore::new(FileStore::new(dir.path().to_path_buf()));
        let loaded = store2.load().await;
        assert_eq!(loaded, favorites);
    }

    #[tokio::test]
    async fn test_missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.get("favorites").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites_in_full() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set("user", "first".to_string()).await.unwrap();
        store.set("user", "second".to_string()).await.unwrap();

        assert_eq!(store.get("user").await.unwrap().as_deref(), Some("second"));
        // No stray temp files left behind.
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set("user", "{}".to_string()).await.unwrap();
        store.remove("user").await.unwrap();
        store.remove("user").await.unwrap();
        assert!(store.get("user").await.unwrap().is_none());
    }
}
