//! Login orchestration: validate, authenticate, then issue or reject.
//!
//! Each request runs through the stages exactly once; faults are surfaced
//! immediately and never retried.

use std::fmt;
use std::time::SystemTime;

use tracing::debug;

use crate::auth::authenticator::{AuthenticatedUser, Authenticator};
use crate::auth::jwt::TokenIssuer;
use crate::error::AppError;
use crate::logging::security;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStage {
    Validating,
    Authenticating,
    IssuingToken,
    Rejecting,
    Responded,
}

impl fmt::Display for LoginStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoginStage::Validating => "validating",
            LoginStage::Authenticating => "authenticating",
            LoginStage::IssuingToken => "issuing_token",
            LoginStage::Rejecting => "rejecting",
            LoginStage::Responded => "responded",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub token: String,
    pub user: AuthenticatedUser,
    /// Expiry (seconds since epoch)
    pub expires_at: i64,
}

/// Run one login attempt as of `now`.
pub fn login(
    authenticator: &Authenticator,
    issuer: &TokenIssuer,
    identifier: &str,
    secret: &str,
    now: SystemTime,
) -> Result<LoginSuccess, AppError> {
    debug!(stage = %LoginStage::Validating, "Login request");
    let checked = Authenticator::check_input(identifier, secret).and_then(|()| {
        debug!(stage = %LoginStage::Authenticating, "Login request");
        authenticator.authenticate(identifier, secret)
    });

    let user = match checked {
        Ok(user) => user,
        Err(failure) => {
            debug!(stage = %LoginStage::Rejecting, reason = %failure, "Login request");
            security::login_failed(failure.reason(), identifier);
            return Err(failure.into());
        }
    };

    debug!(stage = %LoginStage::IssuingToken, "Login request");
    let issued = issuer.issue(&user, now)?;

    security::login_succeeded(&user.identifier, user.role);
    debug!(stage = %LoginStage::Responded, "Login request");

    Ok(LoginSuccess {
        token: issued.token,
        expires_at: issued.claims.exp,
        user,
    })
}
