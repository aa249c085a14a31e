//! # library-service
//!
//! Business logic service layer for OnlineLibrary. Each service wraps a
//! repository, normalizes and validates its inputs, and turns missing rows
//! into `NotFound` errors.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod catalog;
pub mod input;
pub mod user;

pub use catalog::{AuthorService, BookService};
pub use user::UserAdminService;
