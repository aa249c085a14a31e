//! `AuthUser` extractor: reads the identity attached by `require_auth`.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use library_auth::{AuthError, RequestIdentity};

use crate::error::ApiError;

/// Extracted authenticated identity available in handlers.
///
/// Only usable on routes wrapped by the `require_auth` middleware.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestIdentity);

impl std::ops::Deref for AuthUser {
    type Target = RequestIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError::from(AuthError::MissingAuth))
    }
}
