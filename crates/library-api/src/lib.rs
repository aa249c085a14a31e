//! # library-api
//!
//! HTTP API layer for OnlineLibrary built on Axum.
//!
//! Provides the REST endpoints for sign-up, sign-in and the catalog,
//! the authentication and admin-role middleware, extractors, DTOs, and
//! the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
