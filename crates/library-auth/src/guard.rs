//! Per-request authentication and role enforcement.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AuthError;
use crate::identity::RequestIdentity;
use crate::jwt::JwtDecoder;

/// Authorization scheme accepted in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// Gate placed in front of protected operations.
///
/// `authenticate` turns a raw `Authorization` header into an identity;
/// `require_admin` then checks the role that identity carries.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    decoder: Arc<JwtDecoder>,
}

impl AccessGuard {
    /// Creates a guard that verifies tokens with `decoder`.
    pub fn new(decoder: Arc<JwtDecoder>) -> Self {
        Self { decoder }
    }

    /// Extracts and verifies the bearer token, yielding the caller's identity.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<RequestIdentity, AuthError> {
        let token = bearer_token(authorization)?;

        let claims = self.decoder.verify(token).map_err(|reason| {
            warn!(reason = %reason, "Bearer token rejected");
            AuthError::InvalidToken(reason)
        })?;

        debug!(user_id = claims.user_id, role = %claims.role, "Request authenticated");
        Ok(RequestIdentity::from(claims))
    }

    /// Admits only identities whose embedded role is admin.
    pub fn require_admin(identity: Option<&RequestIdentity>) -> Result<(), AuthError> {
        let identity = identity.ok_or(AuthError::NoRole)?;
        if !identity.is_admin() {
            warn!(
                user_id = identity.user_id,
                role = %identity.role,
                "Admin-only operation refused"
            );
            return Err(AuthError::Forbidden);
        }
        Ok(())
    }
}

/// Splits `Bearer <token>` into its token part.
///
/// The header must be exactly two whitespace-separated parts, the first
/// being the bearer scheme.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, AuthError> {
    let header = authorization.ok_or(AuthError::MissingAuth)?;
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) => Ok(token),
        _ => Err(AuthError::MissingAuth),
    }
}
