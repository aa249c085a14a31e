//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use library_auth::{
    AccessGuard, Authenticator, JwtDecoder, JwtEncoder, PasswordHasher, UserStore,
};
use library_core::config::AppConfig;
use library_core::error::AppError;
use library_database::DatabasePool;
use library_database::repositories::{AuthorRepository, BookRepository, UserRepository};
use library_service::{AuthorService, BookService, UserAdminService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Sign-in and registration
    pub authenticator: Arc<Authenticator>,
    /// Bearer token verification and role check
    pub access_guard: Arc<AccessGuard>,

    // ── Services ─────────────────────────────────────────────
    /// Author catalog service
    pub author_service: Arc<AuthorService>,
    /// Book catalog service
    pub book_service: Arc<BookService>,
    /// User administration service
    pub user_service: Arc<UserAdminService>,
}

impl AppState {
    /// Wires every dependency over a single pool, with users read from it.
    pub fn new(config: AppConfig, db_pool: DatabasePool) -> Result<Self, AppError> {
        let user_repo = Arc::new(UserRepository::new(db_pool.pool().clone()));
        Self::with_user_store(config, db_pool, user_repo)
    }

    /// Like `new`, but authentication reads users from `user_store`.
    ///
    /// Only sign-up, sign-in and `POST /users` go through `user_store`.
    /// Listing, fetching, updating and deleting users still hit Postgres, so
    /// with a store other than the pool's `UserRepository` the two halves of
    /// user administration see different data. Meant for tests that stay on
    /// the auth paths.
    pub fn with_user_store(
        config: AppConfig,
        db_pool: DatabasePool,
        user_store: Arc<dyn UserStore>,
    ) -> Result<Self, AppError> {
        let pool = db_pool.pool().clone();

        // ── Repositories ─────────────────────────────────────
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let author_repo = Arc::new(AuthorRepository::new(pool.clone()));
        let book_repo = Arc::new(BookRepository::new(pool));

        // ── Auth ─────────────────────────────────────────────
        let hasher = Arc::new(PasswordHasher::new(&config.auth).map_err(|e| {
            AppError::configuration(format!("Password hasher setup failed: {e}"))
        })?);
        let encoder = Arc::new(JwtEncoder::new(&config.auth).map_err(startup_error)?);
        let decoder = Arc::new(JwtDecoder::new(&config.auth).map_err(startup_error)?);

        let authenticator = Arc::new(Authenticator::new(user_store, hasher, encoder));
        let access_guard = Arc::new(AccessGuard::new(decoder));

        // ── Services ─────────────────────────────────────────
        let author_service = Arc::new(AuthorService::new(author_repo));
        let book_service = Arc::new(BookService::new(book_repo));
        let user_service = Arc::new(UserAdminService::new(
            user_repo,
            Arc::clone(&authenticator),
        ));

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            authenticator,
            access_guard,
            author_service,
            book_service,
            user_service,
        })
    }
}

fn startup_error(err: library_auth::TokenError) -> AppError {
    AppError::configuration(format!("Token codec setup failed: {err}"))
}
