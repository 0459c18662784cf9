//! # API crate — application services for Verdant
//!
//! Everything the screens call lives here: authentication against the user
//! directory, the plant-catalog HTTP client, and the favorites service that
//! mediates between a screen's state and the device storage in the `store`
//! crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login/registration validation, password hashing, the user directory, and [`AuthService`] |
//! | [`catalog`] | Trefle REST client ([`CatalogClient`]) and the catalog-side name filter |
//! | [`error`] | [`ApiError`] — the crate-wide error type; user-facing messages live in its `Display` impl |
//! | [`favorites`] | [`FavoritesService`] — snapshot, confirmation gate, persist-then-commit writes |
//! | [`models`] | Directory-side [`User`] and its session projection |
//!
//! Storage types ([`Favorites`], [`PlantRecord`], [`UserSession`]) are
//! re-exported from `store` so screen code only needs this crate.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod models;

pub use auth::{AuthService, MemoryDirectory, UserDirectory};
pub use catalog::{filter_by_name, CatalogClient, CatalogConfig, PlantDetail};
pub use error::ApiError;
pub use favorites::FavoritesService;
pub use models::User;

pub use store::{Favorites, PlantRecord, UserSession};
