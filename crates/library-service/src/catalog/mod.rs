//! Author and book catalog services.

pub mod author;
pub mod book;

pub use author::AuthorService;
pub use book::BookService;
