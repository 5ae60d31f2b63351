use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::auth::authenticator::Authenticator;
use crate::auth::credentials::CredentialStore;
use crate::auth::jwt::TokenIssuer;
use crate::auth::session::SessionCapability;

/// Application state shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    pub authenticator: Authenticator,
    pub issuer: TokenIssuer,
    pub sessions: SessionCapability,
}

impl AppState {
    /// Create a new AppState from a credential store and signing config
    pub fn new(store: Arc<dyn CredentialStore>, security: SecurityConfig) -> Self {
        Self {
            authenticator: Authenticator::new(store),
            issuer: TokenIssuer::new(security),
            sessions: SessionCapability::Unsupported,
        }
    }
}
