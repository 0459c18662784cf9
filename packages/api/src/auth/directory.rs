//! # Account directory
//!
//! [`UserDirectory`] abstracts where accounts live. The app ships with
//! [`MemoryDirectory`], an in-process directory good enough for a device-local
//! catalog app; a hosted backend would implement the same trait.
//!
//! Lookup is by email only — password verification happens in the auth
//! service against the stored hash, so a directory never sees a plaintext
//! password. Creation enforces uniqueness of both email and username and
//! applies the directory's own policies: sequential ids starting at 1 and a
//! generated placeholder avatar per account.

use std::sync::{Arc, Mutex};

use super::password;
use crate::error::ApiError;
use crate::models::User;

/// Async trait over an account directory.
pub trait UserDirectory {
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, ApiError>>;
    fn create_user(
        &self,
        name: &str,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> impl std::future::Future<Output = Result<User, ApiError>>;
}

/// In-memory account directory.
///
/// Clones share the same account list.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-populated with one demo account
    /// (`demo@example.com` / `demo123`), so login works out of the box.
    pub fn seeded() -> Result<Self, ApiError> {
        let directory = Self::new();
        let demo = User {
            id: 1,
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            username: "demo_user".to_string(),
            password_hash: password::hash_password("demo123")?,
            image: "https://randomuser.me/api/portraits/men/1.jpg".to_string(),
        };
        directory.users.lock().unwrap().push(demo);
        Ok(directory)
    }
}

impl UserDirectory for MemoryDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<User, ApiError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email == email || u.username == username)
        {
            return Err(ApiError::AlreadyRegistered);
        }

        let id = users.len() as i64 + 1;
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            image: format!("https://randomuser.me/api/portraits/men/{id}.jpg"),
        };
        users.push(user.clone());
        Ok(user)
    }
}
