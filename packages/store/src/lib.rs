pub mod error;
pub mod favorites;
pub mod kv;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use error::StoreError;
pub use favorites::{Favorites, FavoritesStore, FAVORITES_KEY};
pub use kv::KeyValueStore;
pub use models::{PlantRecord, UserSession};
pub use session::{SessionStore, SESSION_KEY};
