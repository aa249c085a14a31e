//! Request handlers, grouped by resource.

pub mod auth;
pub mod author;
pub mod book;
pub mod health;
pub mod user;
