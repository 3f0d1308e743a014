//! In-memory credential store guarded by a Tokio read-write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use inkpost_core::error::AppError;
use inkpost_core::result::AppResult;
use inkpost_entity::user::{CreateUser, User};

use crate::traits::CredentialStore;

/// Credential records keyed by username.
///
/// The uniqueness check and the insert run under one write lock, which is
/// this store's equivalent of a unique index.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryUserStore {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&data.username) {
            return Err(AppError::conflict("Username already exists"));
        }

        let user = User {
            id: Uuid::now_v7(),
            username: data.username.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            created_at: Utc::now(),
        };
        users.insert(user.username.clone(), user.clone());
        debug!(user_id = %user.id, "Stored credential record");

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpost_core::error::ErrorKind;
    use inkpost_entity::user::UserRole;

    fn new_user(username: &str, hash: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            password_hash: hash.to_string(),
            role: UserRole::User,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryUserStore::new();
        let created = store.create(&new_user("alice", "h1")).await.unwrap();

        let found = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.role, UserRole::User);
        assert!(store.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_keeps_first_record() {
        let store = MemoryUserStore::new();
        store.create(&new_user("alice", "first")).await.unwrap();

        let err = store.create(&new_user("alice", "second")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let stored = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(stored.password_hash, "first");
    }

    #[tokio::test]
    async fn test_lookup_is_exact() {
        let store = MemoryUserStore::new();
        store.create(&new_user("Alice", "h")).await.unwrap();
        assert!(store.find_by_username("alice").await.unwrap().is_none());
    }
}
