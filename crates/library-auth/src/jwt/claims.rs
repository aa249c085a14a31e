//! JWT claims structure.

use serde::{Deserialize, Serialize};

use library_entity::user::UserRole;

/// Payload of an access token.
///
/// The role is captured at issuance. Promotions and demotions made after
/// that are invisible to the holder until they sign in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user ID.
    pub user_id: i64,
    /// Login name at issuance.
    pub username: String,
    /// Role at issuance.
    pub role: UserRole,
    /// Issued at (Unix seconds).
    pub iat: i64,
    /// Expiration (Unix seconds).
    pub exp: i64,
    /// Issuer.
    pub iss: String,
}

impl Claims {
    /// A token is expired from its `exp` second onward.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
