//! Server-side sessions.
//!
//! Not offered: a signed token is the only proof of a login. The capability
//! is modelled as explicitly absent so nothing can mistake it for a working
//! session lookup.

use crate::error::AppError;

/// A server-side session. Uninhabited: no value of this type can exist.
#[derive(Debug)]
pub enum Session {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionCapability {
    #[default]
    Unsupported,
}

impl SessionCapability {
    pub fn is_supported(&self) -> bool {
        match self {
            SessionCapability::Unsupported => false,
        }
    }

    pub fn current(&self) -> Result<Session, AppError> {
        match self {
            SessionCapability::Unsupported => {
                Err(AppError::not_implemented("Server-side session management"))
            }
        }
    }
}
