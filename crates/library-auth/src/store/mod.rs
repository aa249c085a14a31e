//! User lookup and insertion consumed by sign-in and registration.
//!
//! Provides:
//! - PostgreSQL, through `UserRepository` (production)
//! - In-memory map (single process, tests)

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use library_core::result::AppResult;
use library_entity::user::{NewUser, User};

pub use memory::MemoryUserStore;

/// Source of user records for authentication.
///
/// `insert` must report a taken login or email as a `Conflict` error.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Look up a user by exact login name.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Persist a new user and return it with its assigned id.
    async fn insert(&self, user: NewUser) -> AppResult<User>;
}
