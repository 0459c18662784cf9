//! # Key-value storage abstraction
//!
//! [`KeyValueStore`] is the async interface every storage backend implements.
//! Keys are short well-known strings (see [`crate::session::SESSION_KEY`] and
//! [`crate::favorites::FAVORITES_KEY`]); values are JSON documents, and a
//! `set` replaces the whole value for its key. Implementations live in
//! sibling modules ([`crate::memory`], [`crate::file`], [`crate::idb`]).
//!
//! Reads distinguish "no value stored" (`Ok(None)`) from a backend that could
//! not answer (`Err`). Writes report failure to the caller; a save that did
//! not reach durable storage is never silently dropped.

use crate::error::StoreError;

/// Async trait for reading and writing string values under string keys.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
