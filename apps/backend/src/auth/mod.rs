//! Credential checking and token issuance.

pub mod authenticator;
pub mod claims;
pub mod credentials;
pub mod hashed_store;
pub mod jwt;
pub mod memory_store;
pub mod session;

pub use authenticator::{AuthFailure, AuthResult, AuthenticatedUser, Authenticator};
pub use claims::{TokenClaims, TOKEN_TTL_SECS};
pub use credentials::{CredentialRecord, CredentialStore, Role, StoredSecret};
pub use hashed_store::HashedCredentialStore;
pub use jwt::{IssuedToken, TokenIssuer};
pub use memory_store::InMemoryCredentialStore;
pub use session::{Session, SessionCapability};
