//! The authenticated caller attached to a request.

use serde::{Deserialize, Serialize};

use library_entity::user::UserRole;

use crate::jwt::Claims;

/// Who is making the request, as asserted by a verified token.
///
/// Lives only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestIdentity {
    /// Subject user ID.
    pub user_id: i64,
    /// Login name at token issuance.
    pub username: String,
    /// Role at token issuance.
    pub role: UserRole,
}

impl RequestIdentity {
    /// Check if this identity carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<Claims> for RequestIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            role: claims.role,
        }
    }
}
