//! Author repository implementation.

use sqlx::PgPool;

use library_core::error::{AppError, ErrorKind};
use library_core::result::AppResult;
use library_entity::author::{Author, AuthorInput};

use super::like_pattern;

/// Repository for author CRUD and search.
#[derive(Debug, Clone)]
pub struct AuthorRepository {
    pool: PgPool,
}

impl AuthorRepository {
    /// Create a new author repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all authors ordered by id.
    pub async fn find_all(&self) -> AppResult<Vec<Author>> {
        sqlx::query_as::<_, Author>("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list authors", e))
    }

    /// Find an author by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find author by id", e)
            })
    }

    /// Case-insensitive substring search on the author name.
    pub async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<Author>> {
        sqlx::query_as::<_, Author>(
            "SELECT id, name FROM authors WHERE name ILIKE $1 ORDER BY name",
        )
        .bind(like_pattern(fragment))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search authors", e))
    }

    /// Create a new author.
    pub async fn create(&self, data: &AuthorInput) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("INSERT INTO authors (name) VALUES ($1) RETURNING id, name")
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create author", e))
    }

    /// Rename an existing author.
    pub async fn update(&self, id: i64, data: &AuthorInput) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "UPDATE authors SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(&data.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update author", e))?
        .ok_or_else(|| AppError::not_found(format!("Author {id} not found")))
    }

    /// Delete an author and, by cascade, their books.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete author", e))?;

        Ok(result.rows_affected() > 0)
    }
}
