use std::fmt;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Environment variable holding the HMAC signing secret.
pub const JWT_SECRET_ENV: &str = "BACKEND_JWT_SECRET";

/// Minimum accepted length for a secret loaded from the environment.
pub const MIN_SECRET_LEN: usize = 32;

/// Signing configuration for issued tokens.
///
/// No `Default`: a signer without a configured secret cannot be built.
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC secret for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Build from an explicit secret. An empty secret is `MisconfiguredSigning`.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Result<Self, AppError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.is_empty() {
            return Err(AppError::misconfigured_signing("signing secret is empty"));
        }
        Ok(Self {
            jwt_secret,
            algorithm: Algorithm::HS256,
        })
    }

    /// Load the secret from `BACKEND_JWT_SECRET`, failing closed when absent or short.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = std::env::var(JWT_SECRET_ENV).map_err(|_| {
            AppError::misconfigured_signing(format!("{JWT_SECRET_ENV} must be set"))
        })?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(AppError::misconfigured_signing(format!(
                "{JWT_SECRET_ENV} must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        Self::new(secret.into_bytes())
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
