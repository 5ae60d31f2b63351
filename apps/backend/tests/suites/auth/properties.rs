// Property tests for credential matching.
//
// Driven through the Authenticator. Most properties use the in-memory store
// so each case stays cheap; the bcrypt store gets the long-secret case.

use std::sync::Arc;

use dispatch_auth::auth::{
    AuthFailure, Authenticator, CredentialRecord, HashedCredentialStore, InMemoryCredentialStore,
    Role, StoredSecret,
};
use proptest::prelude::*;

use crate::common::proptest_prelude::proptest_prelude_config;

fn authenticator_for(identifier: &str, secret: &str) -> Authenticator {
    let store = InMemoryCredentialStore::new(vec![CredentialRecord::plain(
        identifier,
        secret,
        "Generated User",
        Role::Dispatcher,
    )])
    .expect("single record is unique");
    Authenticator::new(Arc::new(store))
}

fn hashed_authenticator_for(identifier: &str, secret: &str) -> Authenticator {
    let hash = bcrypt::hash(secret, 4).expect("bcrypt hash");
    let store = HashedCredentialStore::new(vec![CredentialRecord::new(
        identifier,
        StoredSecret::Bcrypt(hash),
        "Generated User",
        Role::Viewer,
    )])
    .expect("single hashed record is valid");
    Authenticator::new(Arc::new(store))
}

/// Lowercase email-shaped identifier plus a per-character case mask.
fn identifier_with_mask() -> impl Strategy<Value = (String, Vec<bool>)> {
    ("[a-z][a-z0-9._]{0,15}", "[a-z]{1,10}").prop_flat_map(|(local, domain)| {
        let identifier = format!("{local}@{domain}.example");
        let len = identifier.len();
        (Just(identifier), prop::collection::vec(any::<bool>(), len))
    })
}

fn apply_case_mask(identifier: &str, mask: &[bool]) -> String {
    identifier
        .chars()
        .zip(mask)
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn prop_identifier_case_never_matters(
        (identifier, mask) in identifier_with_mask(),
        secret in "[ -~]{1,24}",
    ) {
        let authn = authenticator_for(&identifier, &secret);
        let submitted = apply_case_mask(&identifier, &mask);

        let user = authn.authenticate(&submitted, &secret);
        prop_assert!(user.is_ok(), "{submitted} should match {identifier}");
        let user = user.unwrap();
        prop_assert_eq!(user.identifier, identifier);
        prop_assert_eq!(user.role, Role::Dispatcher);
    }

    #[test]
    fn prop_extended_secret_is_unauthorized(
        secret in "[ -~]{1,24}",
        suffix in "[ -~]{1,8}",
    ) {
        let authn = authenticator_for("ops@example.com", &secret);
        let candidate = format!("{secret}{suffix}");

        prop_assert_eq!(
            authn.authenticate("ops@example.com", &candidate),
            Err(AuthFailure::Unauthorized)
        );
    }

    #[test]
    fn prop_truncated_secret_is_unauthorized(secret in "[ -~]{2,24}", cut in 1usize..24) {
        let authn = authenticator_for("ops@example.com", &secret);
        let keep = cut.min(secret.len() - 1);
        let candidate = &secret[..keep];

        prop_assert_eq!(
            authn.authenticate("ops@example.com", candidate),
            Err(AuthFailure::Unauthorized)
        );
    }

    #[test]
    fn prop_secret_case_matters(secret in "[a-z]{1,16}") {
        let authn = authenticator_for("ops@example.com", &secret);

        prop_assert_eq!(
            authn.authenticate("ops@example.com", &secret.to_uppercase()),
            Err(AuthFailure::Unauthorized)
        );
    }

    #[test]
    fn prop_hashed_store_rejects_changed_tail(
        prefix in "[ -~]{60,80}",
        stored_tail in "[a-z]{1,8}",
        submitted_tail in "[A-Z]{1,8}",
    ) {
        let stored = format!("{prefix}{stored_tail}");
        let authn = hashed_authenticator_for("ops@example.com", &stored);

        prop_assert_eq!(
            authn.authenticate("ops@example.com", &format!("{prefix}{submitted_tail}")),
            Err(AuthFailure::Unauthorized)
        );
    }
}
