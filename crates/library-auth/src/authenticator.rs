//! Sign-in and registration against a `UserStore`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use library_core::error::ErrorKind;
use library_entity::user::{NewUser, User, UserRole};

use crate::error::AuthError;
use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;
use crate::store::UserStore;

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignIn {
    /// Bearer token to present on later requests.
    pub token: String,
    /// Instant the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user, role included.
    pub user: User,
}

/// Checks credentials, registers accounts, and mints tokens.
#[derive(Debug, Clone)]
pub struct Authenticator {
    store: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl Authenticator {
    /// Creates an authenticator over the given store.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            store,
            hasher,
            encoder,
        }
    }

    /// Verifies `login` and `password` against the store.
    ///
    /// An unknown login and a wrong password produce the same
    /// `InvalidCredentials` error, from the same branch.
    pub async fn authenticate(&self, login: &str, password: &str) -> Result<User, AuthError> {
        let record = self
            .store
            .find_by_login(login)
            .await
            .map_err(AuthError::Store)?;

        let matched = match &record {
            Some(user) => self.hasher.verify_password(password, &user.password_hash)?,
            None => self.hasher.verify_decoy(password),
        };

        match record {
            Some(user) if matched => Ok(user),
            _ => {
                warn!(login = %login, "Sign-in rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Hashes the password and stores a new account with the default role.
    ///
    /// Login and email are trimmed before storage and must not end up empty.
    pub async fn register(
        &self,
        login: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let login = non_empty("username", login)?;
        let email = non_empty("email", email)?;
        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .store
            .insert(NewUser {
                username: login.to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::default(),
            })
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => AuthError::DuplicateLogin(e.message),
                _ => AuthError::Store(e),
            })?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Authenticates and issues a token carrying the user's current role.
    pub async fn sign_in(&self, login: &str, password: &str) -> Result<SignIn, AuthError> {
        let user = self.authenticate(login, password).await?;

        let issued = self
            .encoder
            .issue(user.id, &user.username, user.role)
            .map_err(AuthError::Issue)?;

        info!(user_id = user.id, role = %user.role, "User signed in");
        Ok(SignIn {
            token: issued.token,
            expires_at: issued.expires_at,
            user,
        })
    }
}

fn non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, AuthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AuthError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}
