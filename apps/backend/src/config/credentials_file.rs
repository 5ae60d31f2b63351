//! Loading hashed credentials from the file named by `CREDENTIALS_FILE`.
//!
//! The file is a JSON array:
//!
//! ```json
//! [{"identifier": "ops@example.com", "secret_hash": "$2b$12$...",
//!   "display_name": "Ops Desk", "role": "dispatcher"}]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::auth::credentials::{CredentialRecord, Role, StoredSecret};
use crate::auth::hashed_store::HashedCredentialStore;
use crate::error::AppError;

pub const CREDENTIALS_FILE_ENV: &str = "CREDENTIALS_FILE";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CredentialEntry {
    identifier: String,
    secret_hash: String,
    display_name: String,
    role: Role,
}

impl From<CredentialEntry> for CredentialRecord {
    fn from(entry: CredentialEntry) -> Self {
        CredentialRecord::new(
            entry.identifier,
            StoredSecret::Bcrypt(entry.secret_hash),
            entry.display_name,
            entry.role,
        )
    }
}

/// Parse credential records from JSON text.
pub fn parse_credentials(json: &str) -> Result<Vec<CredentialRecord>, AppError> {
    let entries: Vec<CredentialEntry> = serde_json::from_str(json)
        .map_err(|e| AppError::config(format!("invalid credentials file: {e}")))?;

    if entries.is_empty() {
        return Err(AppError::config("credentials file contains no entries"));
    }

    Ok(entries.into_iter().map(CredentialRecord::from).collect())
}

/// Read and validate the credentials file into a ready store.
pub fn load_credentials_file(path: &Path) -> Result<HashedCredentialStore, AppError> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::config(format!(
            "failed to read credentials file {}: {e}",
            path.display()
        ))
    })?;

    HashedCredentialStore::new(parse_credentials(&json)?)
}
