//! Admin-role middleware for privileged routes.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use library_auth::{AccessGuard, RequestIdentity};

use crate::error::ApiError;

/// Lets the request through only if the attached identity is an admin.
///
/// Must run after `require_auth`; without an identity the request is
/// refused as having no role.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    AccessGuard::require_admin(request.extensions().get::<RequestIdentity>())?;
    Ok(next.run(request).await)
}
