//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use library_entity::author::AuthorInput;
use library_entity::book::BookInput;
use library_entity::user::{UpdateUser, UserRole};

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Login name.
    #[validate(length(min = 1, max = 64, message = "Username is required"))]
    pub username: String,
    /// Contact email.
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// Login name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create user request (admin).
pub type CreateUserRequest = SignUpRequest;

/// Update user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// Login name.
    #[validate(length(min = 1, max = 64, message = "Username is required"))]
    pub username: String,
    /// Contact email.
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    /// Role.
    pub role: UserRole,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            role: req.role,
        }
    }
}

/// Author create and update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthorRequest {
    /// Full name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
}

impl From<AuthorRequest> for AuthorInput {
    fn from(req: AuthorRequest) -> Self {
        Self { name: req.name }
    }
}

/// Book create and update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookRequest {
    /// Short name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Full title.
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    /// Owning author.
    #[validate(range(min = 1, message = "Author id must be positive"))]
    pub author_id: i64,
}

impl From<BookRequest> for BookInput {
    fn from(req: BookRequest) -> Self {
        Self {
            name: req.name,
            title: req.title,
            author_id: req.author_id,
        }
    }
}

/// `?name=` query for search endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Fragment to look for.
    #[serde(default)]
    pub name: String,
}
