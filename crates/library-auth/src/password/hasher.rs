//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use library_core::config::AuthConfig;

use crate::error::AuthError;

/// Handles password hashing and verification using Argon2id.
///
/// Cost parameters come from configuration; verification reads them back
/// from the stored PHC string, so hashes made under older settings still
/// verify after a cost change.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Argon2 cost parameters used for new hashes.
    params: Params,
    /// Hash of a throwaway secret, verified against when the login is unknown.
    decoy_hash: String,
}

impl PasswordHasher {
    /// Creates a hasher with the configured Argon2 costs.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AuthError::Hashing(format!("invalid argon2 parameters: {e}")))?;

        let decoy_hash = hash_with(&params, "decoy-password-never-matches")?;
        Ok(Self { params, decoy_hash })
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        hash_with(&self.params, password)
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// A stored value that is not a PHC hash string is an error.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AuthError::Hashing(format!("invalid password hash format: {e}")))?;

        match argon2(&self.params).verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Hashing(format!(
                "password verification failed: {e}"
            ))),
        }
    }

    /// Spends one verification on the decoy hash and reports a mismatch.
    ///
    /// Keeps the unknown-login path as slow as the wrong-password path.
    pub fn verify_decoy(&self, password: &str) -> bool {
        let _ = self.verify_password(password, &self.decoy_hash);
        false
    }
}

fn argon2(params: &Params) -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
}

fn hash_with(params: &Params, password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2(params)
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}
