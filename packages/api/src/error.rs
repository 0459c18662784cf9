//! # Error taxonomy for screen-facing operations
//!
//! [`ApiError`] is the one error type every operation in this crate returns.
//! Its `Display` strings are the user-facing notification text: a screen can
//! show `error.to_string()` in an alert without further mapping.
//!
//! Three families, mirroring how screens react:
//!
//! - **Validation / credential / duplicate** — the user typed something we
//!   reject. Reported immediately; nothing was changed.
//! - **Storage** — a durable write or read actually failed (not "key
//!   absent"; absent data is empty state, never an error).
//! - **Network** — the catalog could not be reached, answered with a
//!   non-success status, or timed out.

use store::StoreError;
use thiserror::Error;

/// Error type for authentication, favorites, and catalog operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A form field failed validation. Carries the message shown to the user.
    #[error("{0}")]
    Validation(String),

    /// Login rejected: unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration rejected: the email or username is taken.
    #[error("Email or username already exists")]
    AlreadyRegistered,

    /// Durable device storage failed.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),

    /// The catalog request failed.
    #[error("network failure: {0}")]
    Network(String),

    /// Missing or unusable configuration (e.g. no catalog token).
    #[error("configuration error: {0}")]
    Config(String),

    /// A failure that indicates a bug or corrupt data, not user input.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Creates a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// True for errors caused by what the user typed (validation,
    /// credentials, duplicates) rather than by infrastructure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidCredentials | Self::AlreadyRegistered
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::StoreError;

    #[test]
    fn test_user_errors_are_classified() {
        assert!(ApiError::validation("Please fill in all fields").is_user_error());
        assert!(ApiError::InvalidCredentials.is_user_error());
        assert!(ApiError::AlreadyRegistered.is_user_error());

        assert!(!ApiError::network("timed out").is_user_error());
        assert!(!ApiError::config("TREFLE_API_TOKEN not set").is_user_error());
        assert!(!ApiError::internal("bad hash").is_user_error());
        assert!(!ApiError::Storage(StoreError::backend("disk full")).is_user_error());
    }

    #[test]
    fn test_only_validation_is_validation() {
        assert!(ApiError::validation("Please enter a valid email").is_validation());
        assert!(!ApiError::InvalidCredentials.is_validation());
    }
}
