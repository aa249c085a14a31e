//! JWT token validation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;

use library_core::config::AuthConfig;

use super::ALGORITHM;
use super::claims::Claims;
use crate::error::TokenError;

/// Validates HS256 access tokens against the configured secret and issuer.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, TokenError> {
        if config.jwt_secret.is_empty() {
            return Err(TokenError::Signing("signing secret is empty".to_string()));
        }

        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked against an injectable clock in `verify_at`.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Verifies a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verifies a token as if the current time were `now` (Unix seconds).
    ///
    /// Checks in order: shape, declared algorithm, signature, issuer, expiry.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let alg = declared_algorithm(token)?;
        if alg != "HS256" {
            return Err(TokenError::UnsupportedAlgorithm(alg));
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(map_decode_error)?
            .claims;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}

/// Reads `alg` from the header without trusting anything else in it.
fn declared_algorithm(token: &str) -> Result<String, TokenError> {
    let mut segments = token.split('.');
    let (Some(header), Some(_), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed(
            "expected three dot-separated segments".to_string(),
        ));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|e| TokenError::Malformed(format!("header is not base64url: {e}")))?;
    let raw: RawHeader = serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::Malformed(format!("header is not valid JSON: {e}")))?;
    Ok(raw.alg)
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidAlgorithm => TokenError::UnsupportedAlgorithm(format!("{err}")),
        ErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
        ErrorKind::MissingRequiredClaim(claim) if claim == "iss" => TokenError::InvalidIssuer,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed(err.to_string()),
    }
}
