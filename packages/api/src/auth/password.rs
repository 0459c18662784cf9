//! # Password hashing and verification — Argon2id
//!
//! The account directory never holds a plaintext password. [`hash_password`]
//! salts via [`OsRng`] and produces a PHC-format string (e.g.
//! `$argon2id$v=19$m=19456,t=2,p=1$...`) stored as [`crate::models::User::password_hash`];
//! [`verify_password`] parses that string and checks a login attempt against
//! it — `Ok(true)` on match, `Ok(false)` on mismatch, `Err` only when the
//! stored hash itself is malformed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::ApiError;

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::internal(format!("failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::internal(format!("invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
