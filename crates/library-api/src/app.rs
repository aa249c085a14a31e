//! Application builder: wires router, state, and the listener together.

use axum::Router;
use axum::middleware::from_fn;
use tower_http::trace::TraceLayer;
use tracing::info;

use library_core::config::AppConfig;
use library_core::error::AppError;
use library_database::DatabasePool;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(from_fn(request_logging))
}

/// Runs the OnlineLibrary server until Ctrl-C.
pub async fn run_server(config: AppConfig, db_pool: DatabasePool) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let state = AppState::new(config, db_pool.clone())?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "OnlineLibrary server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
