//! Author catalog operations.

use std::sync::Arc;

use tracing::info;

use library_auth::RequestIdentity;
use library_core::error::AppError;
use library_core::result::AppResult;
use library_database::repositories::AuthorRepository;
use library_entity::author::{Author, AuthorInput};

use crate::input::{required_text, search_fragment};

/// Reads and administers authors.
#[derive(Debug, Clone)]
pub struct AuthorService {
    /// Author repository.
    author_repo: Arc<AuthorRepository>,
}

impl AuthorService {
    /// Creates a new author service.
    pub fn new(author_repo: Arc<AuthorRepository>) -> Self {
        Self { author_repo }
    }

    /// Lists every author.
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.author_repo.find_all().await
    }

    /// Gets one author.
    pub async fn get(&self, id: i64) -> AppResult<Author> {
        self.author_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Author {id} not found")))
    }

    /// Finds authors whose name contains `fragment`, ignoring case.
    pub async fn search(&self, fragment: &str) -> AppResult<Vec<Author>> {
        let fragment = search_fragment(fragment)?;
        self.author_repo.search_by_name(fragment).await
    }

    /// Adds an author.
    pub async fn create(&self, actor: &RequestIdentity, input: AuthorInput) -> AppResult<Author> {
        let input = normalize(input)?;
        let author = self.author_repo.create(&input).await?;

        info!(admin_id = actor.user_id, author_id = author.id, "Author created");
        Ok(author)
    }

    /// Renames an author.
    pub async fn update(
        &self,
        actor: &RequestIdentity,
        id: i64,
        input: AuthorInput,
    ) -> AppResult<Author> {
        let input = normalize(input)?;
        let author = self.author_repo.update(id, &input).await?;

        info!(admin_id = actor.user_id, author_id = id, "Author updated");
        Ok(author)
    }

    /// Removes an author together with their books.
    pub async fn delete(&self, actor: &RequestIdentity, id: i64) -> AppResult<()> {
        if !self.author_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Author {id} not found")));
        }

        info!(admin_id = actor.user_id, author_id = id, "Author deleted");
        Ok(())
    }
}

fn normalize(input: AuthorInput) -> AppResult<AuthorInput> {
    Ok(AuthorInput {
        name: required_text("name", &input.name)?,
    })
}
