//! In-memory user store using a Tokio mutex.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use library_core::error::AppError;
use library_core::result::AppResult;
use library_entity::user::{NewUser, User, UserRole};

use super::UserStore;

#[derive(Debug, Default)]
struct InnerState {
    next_id: i64,
    users: BTreeMap<i64, User>,
}

/// In-memory user store for single-process use and tests.
///
/// Enforces the same login and email uniqueness as the database.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    state: Arc<Mutex<InnerState>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes a stored user's role, as an administrator would.
    pub async fn set_role(&self, id: i64, role: UserRole) -> AppResult<User> {
        let mut state = self.state.lock().await;
        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.role = role;
        Ok(user.clone())
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.state.lock().await.users.len()
    }

    /// Returns `true` if no users are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .values()
            .find(|u| u.username == login)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let mut state = self.state.lock().await;

        if state.users.values().any(|u| u.username == user.username) {
            return Err(AppError::conflict(format!(
                "Username '{}' already exists",
                user.username
            )));
        }
        if state.users.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict("Email already in use"));
        }

        state.next_id += 1;
        let stored = User {
            id: state.next_id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        state.users.insert(stored.id, stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use library_core::error::ErrorKind;

    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: UserRole::User,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryUserStore::new();
        let a = store.insert(new_user("alice", "a@x.io")).await.unwrap();
        let b = store.insert(new_user("bob", "b@x.io")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_login_and_email_conflict() {
        let store = MemoryUserStore::new();
        store.insert(new_user("alice", "a@x.io")).await.unwrap();

        let login = store.insert(new_user("alice", "other@x.io")).await.unwrap_err();
        assert_eq!(login.kind, ErrorKind::Conflict);

        let email = store.insert(new_user("alicia", "a@x.io")).await.unwrap_err();
        assert_eq!(email.kind, ErrorKind::Conflict);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_login_is_exact() {
        let store = MemoryUserStore::new();
        store.insert(new_user("alice", "a@x.io")).await.unwrap();
        assert!(store.find_by_login("alice").await.unwrap().is_some());
        assert!(store.find_by_login("Alice").await.unwrap().is_none());
        assert!(store.find_by_login("ali").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_role() {
        let store = MemoryUserStore::new();
        let user = store.insert(new_user("alice", "a@x.io")).await.unwrap();
        store.set_role(user.id, UserRole::Admin).await.unwrap();

        let found = store.find_by_login("alice").await.unwrap().unwrap();
        assert!(found.is_admin());
        assert!(store.set_role(99, UserRole::Admin).await.is_err());
    }
}
