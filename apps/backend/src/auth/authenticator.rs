use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::credentials::{CredentialStore, Role};
use crate::error::AppError;

/// Message shown for every missing-input rejection; it never names the field.
pub const MISSING_INPUT_MESSAGE: &str = "Identifier and secret are required";

/// Public profile of a successfully authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub identifier: String,
    pub display_name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// Identifier or secret empty or absent.
    InvalidInput,
    /// No credential matched.
    Unauthorized,
}

impl AuthFailure {
    pub const fn reason(&self) -> &'static str {
        match self {
            AuthFailure::InvalidInput => "missing_input",
            AuthFailure::Unauthorized => "no_match",
        }
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::InvalidInput => AppError::invalid_input(MISSING_INPUT_MESSAGE),
            AuthFailure::Unauthorized => AppError::unauthorized(),
        }
    }
}

pub type AuthResult = Result<AuthenticatedUser, AuthFailure>;

/// Checks submitted credentials against an injected store.
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
}

impl Authenticator {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Both fields must be present. The identifier is judged after trimming;
    /// the secret is taken as given.
    pub fn check_input(identifier: &str, secret: &str) -> Result<(), AuthFailure> {
        if identifier.trim().is_empty() || secret.is_empty() {
            return Err(AuthFailure::InvalidInput);
        }
        Ok(())
    }

    pub fn authenticate(&self, identifier: &str, secret: &str) -> AuthResult {
        Self::check_input(identifier, secret)?;

        let record = self
            .store
            .lookup(identifier, secret)
            .ok_or(AuthFailure::Unauthorized)?;

        Ok(AuthenticatedUser {
            identifier: record.identifier,
            display_name: record.display_name,
            role: record.role,
        })
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator").finish_non_exhaustive()
    }
}
