//! Redaction of identifiers and tokens before they reach the logs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Email-shaped identifiers.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

/// Compact JWTs: three base64url segments separated by dots.
static JWT: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\b").unwrap()
});

/// Opaque base64/hex runs of 16 or more characters.
static OPAQUE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}\b").unwrap()
});

/// Mask emails (first character of the local part kept) and opaque tokens.
///
/// Emails go first so their domains are not mistaken for tokens.
pub fn redact(input: &str) -> String {
    let emails = EMAIL.replace_all(input, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => full.to_string(),
            },
            None => full.to_string(),
        }
    });
    let jwts = JWT.replace_all(&emails, "[REDACTED_TOKEN]");
    OPAQUE.replace_all(&jwts, "[REDACTED_TOKEN]").to_string()
}

/// Mask a login identifier whatever its shape.
///
/// Emails keep their first character and domain. Anything else keeps only
/// its first character.
pub fn mask_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();
    let whole_email = EMAIL
        .find(trimmed)
        .is_some_and(|m| m.start() == 0 && m.end() == trimmed.len());

    if whole_email {
        return redact(trimmed);
    }
    match trimmed.chars().next() {
        Some(first) => format!("{first}***"),
        None => String::new(),
    }
}

/// Displays its contents through [`redact`].
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
