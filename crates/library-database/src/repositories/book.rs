//! Book repository implementation.

use sqlx::PgPool;

use library_core::error::{AppError, ErrorKind};
use library_core::result::AppResult;
use library_entity::book::{Book, BookInput};

use super::like_pattern;

const BOOK_SELECT: &str = "SELECT b.id, b.name, b.title, b.author_id, a.name AS author_name \
                           FROM books b JOIN authors a ON a.id = b.author_id";

/// Repository for book CRUD and search.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Create a new book repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all books with their author names.
    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        sqlx::query_as::<_, Book>(&format!("{BOOK_SELECT} ORDER BY b.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list books", e))
    }

    /// Find a book by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        sqlx::query_as::<_, Book>(&format!("{BOOK_SELECT} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find book by id", e))
    }

    /// Case-insensitive substring search on book name or title.
    pub async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<Book>> {
        sqlx::query_as::<_, Book>(&format!(
            "{BOOK_SELECT} WHERE b.name ILIKE $1 OR b.title ILIKE $1 ORDER BY b.title"
        ))
        .bind(like_pattern(fragment))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search books", e))
    }

    /// Create a new book and return it joined with its author.
    pub async fn create(&self, data: &BookInput) -> AppResult<Book> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO books (name, title, author_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&data.name)
        .bind(&data.title)
        .bind(data.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_author_violation(e, data.author_id, "Failed to create book"))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Book {id} vanished after insert")))
    }

    /// Update an existing book.
    pub async fn update(&self, id: i64, data: &BookInput) -> AppResult<Book> {
        let result = sqlx::query(
            "UPDATE books SET name = $2, title = $3, author_id = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.title)
        .bind(data.author_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_author_violation(e, data.author_id, "Failed to update book"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Book {id} not found")));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Book {id} not found")))
    }

    /// Delete a book by ID. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete book", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_author_violation(err: sqlx::Error, author_id: i64, context: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::validation(format!("Author {author_id} does not exist"))
        }
        _ => AppError::with_source(ErrorKind::Database, context, err),
    }
}
