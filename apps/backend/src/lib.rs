#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;


// Re-exports for public API
pub use auth::{
    AuthenticatedUser, Authenticator, CredentialRecord, CredentialStore, HashedCredentialStore,
    InMemoryCredentialStore, Role, TokenClaims, TokenIssuer,
};
pub use config::Config;
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::{ValidatedJson, VerifiedClaims};
pub use middleware::{cors_middleware, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan};
pub use state::{AppState, SecurityConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
