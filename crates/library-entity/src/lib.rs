//! # library-entity
//!
//! Domain entity models for OnlineLibrary. Every struct in this crate
//! represents a database table row or the data needed to write one.
//! Row types derive `sqlx::FromRow`.

pub mod author;
pub mod book;
pub mod user;
