//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use library_core::config::AuthConfig;
use library_entity::user::UserRole;

use super::ALGORITHM;
use super::claims::Claims;
use crate::error::TokenError;

/// Creates signed HS256 access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
    /// Value written into `iss`.
    issuer: String,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// A freshly signed token and the instant it stops being accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Compact JWS serialization.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, TokenError> {
        if config.jwt_secret.is_empty() {
            return Err(TokenError::Signing("signing secret is empty".to_string()));
        }
        let minutes = i64::try_from(config.jwt_ttl_minutes)
            .map_err(|_| TokenError::Signing("token ttl out of range".to_string()))?;
        let ttl = Duration::try_minutes(minutes)
            .ok_or_else(|| TokenError::Signing("token ttl out of range".to_string()))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
            issuer: config.issuer.clone(),
        })
    }

    /// Issues a token for the given identity, valid from now.
    pub fn issue(
        &self,
        user_id: i64,
        username: &str,
        role: UserRole,
    ) -> Result<IssuedToken, TokenError> {
        self.issue_at(user_id, username, role, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        user_id: i64,
        username: &str,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| TokenError::Signing("expiry overflows".to_string()))?;

        let claims = Claims {
            user_id,
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.issuer.clone(),
        };

        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }
}
