//! # User model for the account directory
//!
//! Defines the two representations of a Verdant user:
//!
//! ## [`User`]
//!
//! The complete directory record, including the Argon2 `password_hash`. It
//! never leaves the auth layer and is never persisted to device storage.
//!
//! ## [`store::UserSession`]
//!
//! The client-safe projection written to the device under the session key:
//! profile fields only, no credential material. [`User::to_session`] performs
//! the projection.

use store::UserSession;

/// Full user record held by a [`crate::auth::UserDirectory`].
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    /// Argon2 PHC-format hash; only the verify path reads it.
    pub password_hash: String,
    /// Avatar URL.
    pub image: String,
}

impl User {
    /// Project to the device-persisted session, dropping the credential hash.
    pub fn to_session(&self) -> UserSession {
        UserSession {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            image: self.image.clone(),
        }
    }
}
