//! # library-auth
//!
//! Authentication and authorization for OnlineLibrary.
//!
//! ## Modules
//!
//! - `password`: Argon2id credential hashing and verification
//! - `jwt`: HS256 token issuance and verification
//! - `store`: the user-store seam consumed by sign-in and registration
//! - `authenticator`: credential checks, registration, and token minting
//! - `guard`: per-request bearer extraction, verification, and role check
//!
//! Tokens are stateless: the role is embedded at issuance and trusted until
//! expiry, so a role change only takes effect on the next sign-in.

pub mod authenticator;
pub mod error;
pub mod guard;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod store;

pub use authenticator::{Authenticator, SignIn};
pub use error::{AuthError, TokenError};
pub use guard::AccessGuard;
pub use identity::RequestIdentity;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use store::{MemoryUserStore, UserStore};
