//! Route definitions for the OnlineLibrary HTTP API.
//!
//! Reads are public. Catalog and user writes sit behind two route layers:
//! `require_auth` (outer, runs first) attaches the caller's identity and
//! `require_admin` (inner) checks its role.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with every route and its guards.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes(&state))
        .merge(author_routes(&state))
        .merge(book_routes(&state))
        .merge(user_routes(&state))
        .merge(health_routes())
        .with_state(state)
}

/// Wraps `routes` so that only authenticated admins reach them.
fn admin_only(state: &AppState, routes: Router<AppState>) -> Router<AppState> {
    routes
        .route_layer(axum_middleware::from_fn(middleware::rbac::require_admin))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ))
}

/// Sign-up, sign-in, me
fn auth_routes(state: &AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .route("/auth/sign-up", post(handlers::auth::sign_up))
        .route("/auth/sign-in", post(handlers::auth::sign_in))
        .merge(authenticated)
}

/// Author reads and admin writes
fn author_routes(state: &AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/authors", post(handlers::author::create_author))
        .route(
            "/authors/{id}",
            put(handlers::author::update_author).delete(handlers::author::delete_author),
        );

    Router::new()
        .route("/authors", get(handlers::author::list_authors))
        .route("/authors/search", get(handlers::author::search_authors))
        .route("/authors/{id}", get(handlers::author::get_author))
        .merge(admin_only(state, writes))
}

/// Book reads and admin writes
fn book_routes(state: &AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/books", post(handlers::book::create_book))
        .route(
            "/books/{id}",
            put(handlers::book::update_book).delete(handlers::book::delete_book),
        );

    Router::new()
        .route("/books", get(handlers::book::list_books))
        .route("/books/search", get(handlers::book::search_books))
        .route("/books/{id}", get(handlers::book::get_book))
        .merge(admin_only(state, writes))
}

/// User reads and admin management
fn user_routes(state: &AppState) -> Router<AppState> {
    let writes = Router::new()
        .route("/users", post(handlers::user::create_user))
        .route(
            "/users/{id}",
            put(handlers::user::update_user).delete(handlers::user::delete_user),
        );

    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/{id}", get(handlers::user::get_user))
        .merge(admin_only(state, writes))
}

/// Liveness and readiness
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}
