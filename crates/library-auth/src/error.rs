//! Typed failures of the auth subsystem and their mapping onto `AppError`.
//!
//! Callers only ever see the generic messages produced by the `From`
//! conversion; the precise variant is kept for logs.

use thiserror::Error;

use library_core::error::{AppError, ErrorKind};

/// Reasons a token could not be issued or accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The signing key is unusable or the claims failed to serialize.
    #[error("token signing failed: {0}")]
    Signing(String),
    /// The signature does not match the header and payload.
    #[error("token signature does not verify")]
    InvalidSignature,
    /// The header declares anything other than HS256.
    #[error("token declares unsupported algorithm '{0}'")]
    UnsupportedAlgorithm(String),
    /// The current time is at or past `exp`.
    #[error("token has expired")]
    Expired,
    /// The `iss` claim is missing or names another issuer.
    #[error("token issuer is not accepted")]
    InvalidIssuer,
    /// The token is not three base64url segments of valid JSON claims.
    #[error("token is malformed: {0}")]
    Malformed(String),
}

/// Failures raised by sign-in, registration, and the access guard.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown login or wrong password. The two are never distinguished.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// A registration field is empty after trimming.
    #[error("invalid registration input: {0}")]
    InvalidInput(String),
    /// The store reported a uniqueness violation on registration.
    #[error("duplicate login: {0}")]
    DuplicateLogin(String),
    /// Hashing failed or a stored hash could not be parsed.
    #[error("password hashing failed: {0}")]
    Hashing(String),
    /// No `Authorization: Bearer <token>` header was supplied.
    #[error("missing or malformed authorization header")]
    MissingAuth,
    /// The bearer token failed verification.
    #[error("invalid token: {0}")]
    InvalidToken(TokenError),
    /// A freshly authenticated user could not be issued a token.
    #[error("token issuance failed: {0}")]
    Issue(TokenError),
    /// The role check ran without an identity on the request.
    #[error("no role attached to request")]
    NoRole,
    /// The identity's role is not `admin`.
    #[error("admin privileges required")]
    Forbidden,
    /// The user store failed.
    #[error("user store failure: {0}")]
    Store(#[source] AppError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::unauthorized("invalid credentials"),
            AuthError::MissingAuth | AuthError::InvalidToken(_) => {
                AppError::unauthorized("unauthorized")
            }
            AuthError::NoRole | AuthError::Forbidden => AppError::forbidden("forbidden"),
            AuthError::InvalidInput(message) => AppError::validation(message),
            AuthError::DuplicateLogin(message) => AppError::conflict(message),
            AuthError::Hashing(message) => {
                AppError::internal(format!("Password hashing failed: {message}"))
            }
            AuthError::Issue(reason) => {
                AppError::internal(format!("Token issuance failed: {reason}"))
            }
            AuthError::Store(inner) => {
                AppError::with_source(ErrorKind::Internal, "User store failure", inner)
            }
        }
    }
}
