//! Credential records and the store abstraction the authenticator consults.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::AppError;

/// Role granted to an authenticated identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Dispatcher,
    Viewer,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Dispatcher => "dispatcher",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a record's secret is held.
#[derive(Clone)]
pub enum StoredSecret {
    /// Plaintext. Only acceptable for test doubles.
    Plain(String),
    /// bcrypt hash string (`$2b$<cost>$...`).
    Bcrypt(String),
}

/// bcrypt only reads this many bytes of its input; anything past it is ignored.
pub const BCRYPT_MAX_SECRET_LEN: usize = 72;

impl StoredSecret {
    /// Compare a candidate secret without short-circuiting on its content.
    ///
    /// bcrypt secrets longer than [`BCRYPT_MAX_SECRET_LEN`] never match, since
    /// the bytes past the limit could not be checked. The hash is verified
    /// regardless so the rejection costs the same as any other miss.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            StoredSecret::Plain(stored) => secrets_match(stored, candidate),
            StoredSecret::Bcrypt(hash) => {
                let verified = bcrypt::verify(candidate, hash).unwrap_or(false);
                verified && candidate.len() <= BCRYPT_MAX_SECRET_LEN
            }
        }
    }
}

impl fmt::Debug for StoredSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoredSecret::Plain(_) => f.write_str("Plain(<redacted>)"),
            StoredSecret::Bcrypt(_) => f.write_str("Bcrypt(<redacted>)"),
        }
    }
}

/// One entry in a credential store. Immutable once the store is built.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub identifier: String,
    pub secret: StoredSecret,
    pub display_name: String,
    pub role: Role,
}

impl CredentialRecord {
    pub fn new(
        identifier: impl Into<String>,
        secret: StoredSecret,
        display_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            secret,
            display_name: display_name.into(),
            role,
        }
    }

    /// Record whose secret is held in plaintext.
    pub fn plain(
        identifier: impl Into<String>,
        secret: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self::new(
            identifier,
            StoredSecret::Plain(secret.into()),
            display_name,
            role,
        )
    }

    pub fn matches_identifier(&self, normalized: &str) -> bool {
        normalize_identifier(&self.identifier) == normalized
    }
}

/// Read-only lookup of credentials by identifier and secret.
///
/// A miss is an ordinary outcome, not an error.
pub trait CredentialStore: Send + Sync {
    fn lookup(&self, identifier: &str, secret: &str) -> Option<CredentialRecord>;
}

/// Canonical form used for identifier comparison: trimmed, NFKC, lowercase.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().nfkc().collect::<String>().to_lowercase()
}

/// Constant-time secret comparison.
///
/// Both sides are reduced to fixed-length BLAKE3 digests; `blake3::Hash`
/// equality does not short-circuit, so timing does not depend on where the
/// inputs first differ or on their lengths.
pub fn secrets_match(stored: &str, candidate: &str) -> bool {
    blake3::hash(stored.as_bytes()) == blake3::hash(candidate.as_bytes())
}

/// Reject record sets whose identifiers collide after normalization.
pub fn ensure_unique_identifiers<'a, I>(identifiers: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for identifier in identifiers {
        let normalized = normalize_identifier(identifier);
        if normalized.is_empty() {
            return Err(AppError::config("credential identifier cannot be empty"));
        }
        if !seen.insert(normalized) {
            return Err(AppError::config(format!(
                "duplicate credential identifier: {identifier}"
            )));
        }
    }
    Ok(())
}
