//! Author entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A book author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    /// Unique author identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
}

/// Fields written on author create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorInput {
    /// Full name.
    pub name: String,
}
