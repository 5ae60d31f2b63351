use tracing::debug;

use super::credentials::{
    ensure_unique_identifiers, normalize_identifier, CredentialRecord, CredentialStore,
    StoredSecret,
};
use crate::error::AppError;

/// Production credential store: every secret is a bcrypt hash.
///
/// A miss on the identifier still pays for one bcrypt verification against
/// `dummy_hash`, so unknown identifiers cost the same as wrong secrets.
#[derive(Debug, Clone)]
pub struct HashedCredentialStore {
    records: Vec<CredentialRecord>,
    dummy_hash: String,
}

impl HashedCredentialStore {
    pub fn new(records: Vec<CredentialRecord>) -> Result<Self, AppError> {
        ensure_unique_identifiers(records.iter().map(|r| r.identifier.as_str()))?;

        let mut cost = bcrypt::DEFAULT_COST;
        for record in &records {
            let StoredSecret::Bcrypt(hash) = &record.secret else {
                return Err(AppError::config(format!(
                    "credential {} must carry a bcrypt hash",
                    record.identifier
                )));
            };
            // Malformed hashes fail here rather than silently never matching.
            bcrypt::verify("", hash).map_err(|e| {
                AppError::config(format!(
                    "credential {} has an invalid bcrypt hash: {e}",
                    record.identifier
                ))
            })?;
            cost = hash_cost(hash).unwrap_or(cost);
        }

        let dummy_hash = bcrypt::hash("dispatch-auth/no-such-identifier", cost)
            .map_err(|e| AppError::config(format!("failed to derive dummy hash: {e}")))?;

        debug!(records = records.len(), cost, "Hashed credential store ready");

        Ok(Self {
            records,
            dummy_hash,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CredentialStore for HashedCredentialStore {
    fn lookup(&self, identifier: &str, secret: &str) -> Option<CredentialRecord> {
        let wanted = normalize_identifier(identifier);

        let mut candidate = None;
        for record in &self.records {
            if record.matches_identifier(&wanted) && candidate.is_none() {
                candidate = Some(record);
            }
        }

        match candidate {
            Some(record) if record.secret.matches(secret) => Some(record.clone()),
            Some(_) => None,
            None => {
                let _ = bcrypt::verify(secret, &self.dummy_hash);
                None
            }
        }
    }
}

/// Cost segment of a `$2b$<cost>$<salt+hash>` string.
fn hash_cost(hash: &str) -> Option<u32> {
    hash.split('$').nth(2)?.parse().ok()
}
