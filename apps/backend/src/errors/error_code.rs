//! Error codes for the dispatch-auth API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in the `x-error-code` response header and in logs.

use core::fmt;

/// Centralized error codes for the dispatch-auth API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client input
    /// Missing, empty or malformed request fields
    InvalidInput,

    // Authentication
    /// Credentials did not match any stored record
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Token failed signature or structural checks
    UnauthorizedInvalidToken,
    /// Token is past its expiry
    UnauthorizedExpiredToken,
    /// Too many login attempts from the same client
    RateLimited,

    // Capabilities
    /// Capability is not offered
    NotImplemented,

    // Operator-facing
    /// Signing secret unavailable or unusable
    MisconfiguredSigning,
    /// Configuration error at startup
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",

            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            Self::UnauthorizedExpiredToken => "UNAUTHORIZED_EXPIRED_TOKEN",
            Self::RateLimited => "RATE_LIMITED",

            Self::NotImplemented => "NOT_IMPLEMENTED",

            Self::MisconfiguredSigning => "MISCONFIGURED_SIGNING",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
