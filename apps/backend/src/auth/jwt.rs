use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::authenticator::AuthenticatedUser;
use super::claims::TokenClaims;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// A freshly signed token and the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: TokenClaims,
}

/// Signs and verifies HS256 assertion tokens with a shared secret.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    security: SecurityConfig,
}

impl TokenIssuer {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }

    /// Mint a token for `user`, valid for 24 hours from `now`.
    pub fn issue(&self, user: &AuthenticatedUser, now: SystemTime) -> Result<IssuedToken, AppError> {
        let claims = TokenClaims::for_user(user, unix_seconds(now)?);

        let token = encode(
            &Header::new(self.security.algorithm),
            &claims,
            &EncodingKey::from_secret(&self.security.jwt_secret),
        )
        .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))?;

        Ok(IssuedToken { token, claims })
    }

    /// Verify a token as of `now`.
    ///
    /// Errors:
    /// - `now >= exp` → `AppError::UnauthorizedExpiredToken`
    /// - bad signature, wrong algorithm, malformed → `AppError::UnauthorizedInvalidToken`
    pub fn verify(&self, token: &str, now: SystemTime) -> Result<TokenClaims, AppError> {
        // Expiry is checked against the caller's clock below, without leeway.
        let mut validation = Validation::new(self.security.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(&self.security.jwt_secret),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::unauthorized_invalid_token())?;

        if unix_seconds(now)? >= claims.exp {
            return Err(AppError::unauthorized_expired_token());
        }

        Ok(claims)
    }
}

fn unix_seconds(at: SystemTime) -> Result<i64, AppError> {
    at.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AppError::internal("system clock is before the unix epoch"))
}
