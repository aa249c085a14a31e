//! Book catalog operations.

use std::sync::Arc;

use tracing::info;

use library_auth::RequestIdentity;
use library_core::error::AppError;
use library_core::result::AppResult;
use library_database::repositories::BookRepository;
use library_entity::book::{Book, BookInput};

use crate::input::{positive_id, required_text, search_fragment};

/// Reads and administers books.
#[derive(Debug, Clone)]
pub struct BookService {
    /// Book repository.
    book_repo: Arc<BookRepository>,
}

impl BookService {
    /// Creates a new book service.
    pub fn new(book_repo: Arc<BookRepository>) -> Self {
        Self { book_repo }
    }

    /// Lists every book with its author name.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.book_repo.find_all().await
    }

    /// Gets one book.
    pub async fn get(&self, id: i64) -> AppResult<Book> {
        self.book_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Book {id} not found")))
    }

    /// Finds books whose name or title contains `fragment`, ignoring case.
    pub async fn search(&self, fragment: &str) -> AppResult<Vec<Book>> {
        let fragment = search_fragment(fragment)?;
        self.book_repo.search_by_name(fragment).await
    }

    /// Adds a book. The author must already exist.
    pub async fn create(&self, actor: &RequestIdentity, input: BookInput) -> AppResult<Book> {
        let input = normalize(input)?;
        let book = self.book_repo.create(&input).await?;

        info!(
            admin_id = actor.user_id,
            book_id = book.id,
            author_id = book.author_id,
            "Book created"
        );
        Ok(book)
    }

    /// Replaces a book's name, title and author.
    pub async fn update(
        &self,
        actor: &RequestIdentity,
        id: i64,
        input: BookInput,
    ) -> AppResult<Book> {
        let input = normalize(input)?;
        let book = self.book_repo.update(id, &input).await?;

        info!(admin_id = actor.user_id, book_id = id, "Book updated");
        Ok(book)
    }

    /// Removes a book.
    pub async fn delete(&self, actor: &RequestIdentity, id: i64) -> AppResult<()> {
        if !self.book_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Book {id} not found")));
        }

        info!(admin_id = actor.user_id, book_id = id, "Book deleted");
        Ok(())
    }
}

fn normalize(input: BookInput) -> AppResult<BookInput> {
    Ok(BookInput {
        name: required_text("name", &input.name)?,
        title: required_text("title", &input.title)?,
        author_id: positive_id("author_id", input.author_id)?,
    })
}
