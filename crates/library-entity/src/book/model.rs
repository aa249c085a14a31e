//! Book entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog entry, joined with its author's name on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    /// Unique book identifier.
    pub id: i64,
    /// Short name used for searching.
    pub name: String,
    /// Full title.
    pub title: String,
    /// Owning author.
    pub author_id: i64,
    /// Name of the owning author.
    #[serde(rename = "author")]
    pub author_name: String,
}

/// Fields written on book create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInput {
    /// Short name.
    pub name: String,
    /// Full title.
    pub title: String,
    /// Owning author.
    pub author_id: i64,
}
