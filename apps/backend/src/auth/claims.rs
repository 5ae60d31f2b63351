//! Claims carried by issued assertion tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::authenticator::AuthenticatedUser;
use super::credentials::Role;

/// Validity window of an issued token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Identifier of the authenticated identity
    pub sub: String,
    /// Display name
    pub name: String,
    pub role: Role,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Unique per issuance; two tokens minted in the same second still differ
    pub jti: String,
}

impl TokenClaims {
    pub fn for_user(user: &AuthenticatedUser, issued_at: i64) -> Self {
        Self {
            sub: user.identifier.clone(),
            name: user.display_name.clone(),
            role: user.role,
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn user(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            identifier: self.sub.clone(),
            display_name: self.name.clone(),
            role: self.role,
        }
    }
}
