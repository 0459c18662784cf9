//! # Authentication — login, registration, session lifecycle
//!
//! [`AuthService`] is what the login/register/profile screens call. It wires
//! three pieces together:
//!
//! - [`validation`] — field checks with the messages screens display;
//! - a [`UserDirectory`] — account lookup and creation ([`MemoryDirectory`]
//!   by default);
//! - a [`store::SessionStore`] — the durable `"user"` record on the device.
//!
//! Both login and registration persist the session before returning, so an
//! app restart immediately after either lands signed in. Emails are
//! normalized (trimmed, lowercased) before lookup and storage; validation
//! runs against the raw input first.

mod directory;
mod password;
mod validation;

pub use directory::{MemoryDirectory, UserDirectory};
pub use password::{hash_password, verify_password};
pub use validation::{validate_login, validate_registration};

use store::{KeyValueStore, SessionStore, UserSession};

use crate::error::ApiError;

/// Screen-facing authentication operations over a directory and a session
/// store.
pub struct AuthService<D: UserDirectory, S: KeyValueStore> {
    directory: D,
    sessions: SessionStore<S>,
}

impl<D: UserDirectory, S: KeyValueStore> AuthService<D, S> {
    pub fn new(directory: D, store: S) -> Self {
        Self {
            directory,
            sessions: SessionStore::new(store),
        }
    }

    /// Log in with email and password.
    ///
    /// The session write is awaited before returning, so a restart right
    /// after a successful login lands signed in; a failed write surfaces as
    /// a storage error.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSession, ApiError> {
        validation::validate_login(email, password)?;

        let email = email.trim().to_lowercase();
        let Some(user) = self.directory.find_by_email(&email).await? else {
            tracing::warn!("Login rejected: unknown account");
            return Err(ApiError::InvalidCredentials);
        };
        if !password::verify_password(password, &user.password_hash)? {
            tracing::warn!("Login rejected: wrong password for user {}", user.id);
            return Err(ApiError::InvalidCredentials);
        }

        let session = user.to_session();
        self.sessions.save(&session).await?;
        Ok(session)
    }

    /// Register a new account and sign it in.
    ///
    /// Any validation or uniqueness failure aborts before the directory or
    /// the device storage is touched, so a rejected form leaves no trace.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<UserSession, ApiError> {
        validation::validate_registration(name, email, username, password, confirm_password)?;

        let email = email.trim().to_lowercase();
        let password_hash = password::hash_password(password)?;
        let user = self
            .directory
            .create_user(name, &email, username, &password_hash)
            .await?;

        let session = user.to_session();
        self.sessions.save(&session).await?;
        Ok(session)
    }

    /// Sign out: remove the stored session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        Ok(self.sessions.clear().await?)
    }

    /// The signed-in user, if any — the app-startup check. An absent or
    /// unreadable session reads as signed out, never as an error.
    pub async fn current_user(&self) -> Option<UserSession> {
        self.sessions.load().await
    }
}
