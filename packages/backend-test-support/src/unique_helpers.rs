//! Unique test data backed by ULIDs, so parallel tests never share an
//! identifier.

use ulid::Ulid;

/// A unique email-shaped identifier, lowercase.
///
/// ```
/// use backend_test_support::unique_helpers::unique_identifier;
///
/// let id = unique_identifier("ops");
/// assert!(id.ends_with("@example.test"));
/// assert_eq!(id, id.to_lowercase());
/// ```
pub fn unique_identifier(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new()).to_lowercase()
}

/// A random-looking secret long enough to never collide with a fixture.
pub fn unique_secret() -> String {
    format!("pw-{}", Ulid::new())
}
