//! User repository implementation.

use sqlx::PgPool;
use tracing::debug;

use library_core::error::{AppError, ErrorKind};
use library_core::result::AppResult;
use library_entity::user::{NewUser, UpdateUser, User};

const USER_COLUMNS: &str = "id, username, email, password_hash, role, created_at";

/// Repository for user CRUD and lookup operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by exact login name.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        debug!(username = %username, "Looking up user by username");
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
        })
    }

    /// List all users ordered by id.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Create a new user.
    ///
    /// Returns a `Conflict` error when the username or email is taken.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &data.username, "Failed to create user"))
    }

    /// Update a user's login, email and role.
    pub async fn update(&self, id: i64, data: &UpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET username = $2, email = $3, role = $4 \
             WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(&data.username)
        .bind(&data.email)
        .bind(data.role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &data.username, "Failed to update user"))?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Delete a user by ID. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_unique_violation(err: sqlx::Error, username: &str, context: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_username_key") => {
            AppError::conflict(format!("Username '{username}' already exists"))
        }
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
            AppError::conflict("Email already in use")
        }
        _ => AppError::with_source(ErrorKind::Database, context, err),
    }
}
