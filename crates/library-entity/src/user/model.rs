//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 PHC hash of the password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Privilege label.
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to insert a new account.
///
/// The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Desired login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Administrative update of an existing account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New login name.
    pub username: String,
    /// New email address.
    pub email: String,
    /// New role.
    pub role: UserRole,
}
