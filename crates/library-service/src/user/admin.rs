//! Admin user management: listing, creation, profile and role changes.

use std::sync::Arc;

use tracing::info;

use library_auth::{Authenticator, RequestIdentity};
use library_core::error::AppError;
use library_core::result::AppResult;
use library_database::repositories::UserRepository;
use library_entity::user::{UpdateUser, User};

use crate::input::required_text;

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct UserAdminService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Used for account creation so passwords are hashed in one place.
    authenticator: Arc<Authenticator>,
}

impl UserAdminService {
    /// Creates a new admin user service.
    pub fn new(user_repo: Arc<UserRepository>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            user_repo,
            authenticator,
        }
    }

    /// Lists all users.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    /// Gets a single user by ID.
    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Creates an account with the default role.
    ///
    /// Shares sign-up's normalization, so both paths store the same login.
    pub async fn create(
        &self,
        actor: &RequestIdentity,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<User> {
        let user = self
            .authenticator
            .register(username, email, password)
            .await?;

        info!(
            admin_id = actor.user_id,
            new_user_id = user.id,
            username = %user.username,
            "User created by admin"
        );
        Ok(user)
    }

    /// Replaces a user's login, email and role.
    ///
    /// A role change does not reach tokens that were already issued.
    pub async fn update(
        &self,
        actor: &RequestIdentity,
        id: i64,
        data: UpdateUser,
    ) -> AppResult<User> {
        let data = UpdateUser {
            username: required_text("username", &data.username)?,
            email: required_text("email", &data.email)?,
            role: data.role,
        };
        let user = self.user_repo.update(id, &data).await?;

        info!(
            admin_id = actor.user_id,
            user_id = id,
            role = %user.role,
            "User updated by admin"
        );
        Ok(user)
    }

    /// Deletes a user.
    pub async fn delete(&self, actor: &RequestIdentity, id: i64) -> AppResult<()> {
        if actor.user_id == id {
            return Err(AppError::validation("Administrators cannot delete themselves"));
        }
        if !self.user_repo.delete(id).await? {
            return Err(AppError::not_found(format!("User {id} not found")));
        }

        info!(admin_id = actor.user_id, user_id = id, "User deleted by admin");
        Ok(())
    }
}
