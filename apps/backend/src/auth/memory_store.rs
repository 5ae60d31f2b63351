use super::credentials::{
    ensure_unique_identifiers, normalize_identifier, CredentialRecord, CredentialStore,
};
use crate::error::AppError;

/// Credential store backed by a fixed in-memory list. Intended as a test double.
#[derive(Debug, Clone)]
pub struct InMemoryCredentialStore {
    records: Vec<CredentialRecord>,
}

impl InMemoryCredentialStore {
    pub fn new(records: Vec<CredentialRecord>) -> Result<Self, AppError> {
        ensure_unique_identifiers(records.iter().map(|r| r.identifier.as_str()))?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn lookup(&self, identifier: &str, secret: &str) -> Option<CredentialRecord> {
        let wanted = normalize_identifier(identifier);

        // Every record is visited and every secret compared.
        let mut found = None;
        for record in &self.records {
            let id_match = record.matches_identifier(&wanted);
            let secret_match = record.secret.matches(secret);
            if id_match && secret_match && found.is_none() {
                found = Some(record.clone());
            }
        }
        found
    }
}
