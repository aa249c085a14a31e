//! # library-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for users, authors, and books.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
