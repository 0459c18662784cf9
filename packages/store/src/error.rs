//! Error type shared by all key-value backends and the stores built on them.

use thiserror::Error;

/// A failure in durable device storage.
///
/// Absent data is never an error: backends return `Ok(None)` for a missing
/// key, and the domain stores ([`crate::FavoritesStore`], [`crate::SessionStore`])
/// degrade unreadable values to empty state. `StoreError` is reserved for the
/// cases a caller must hear about — chiefly writes that did not take effect.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem failure while reading or writing a key.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Platform backend failure (e.g. an IndexedDB transaction error).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a Backend error from any displayable cause.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}
