//! Bearer-token authentication middleware.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Verifies the bearer token and attaches the caller's `RequestIdentity`
/// to the request extensions.
///
/// A header that is not valid UTF-8 is treated as absent.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let identity = state.access_guard.authenticate(authorization)?;
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
