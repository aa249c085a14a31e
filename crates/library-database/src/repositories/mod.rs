//! Repository implementations for all library entities.

pub mod author;
pub mod book;
pub mod user;

pub use author::AuthorRepository;
pub use book::BookRepository;
pub use user::UserRepository;

/// Escapes backslash, `%` and `_` so `fragment` matches literally inside `ILIKE`.
///
/// Postgres treats backslash as the default `LIKE` escape character.
pub(crate) fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
