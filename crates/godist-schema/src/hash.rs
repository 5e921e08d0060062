use serde::{Deserialize, Serialize};

/// Newtype for a SHA256 hash string as published by the feed.
///
/// Decoding never rejects a value: the feed uses an empty string for files
/// whose digest is not published yet, and that has to survive decoding so
/// the resolver can gate on it. Use [`Sha256Hash::validated`] where a
/// well-formed digest is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Sha256Hash(String);

impl Sha256Hash {
    /// Create a new `Sha256Hash` without validation (for feed data).
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Check that the hash is exactly 64 hex characters.
    ///
    /// # Errors
    ///
    /// Returns an error string if the hash is not exactly 64 ASCII hex characters.
    pub fn validated(&self) -> Result<&Self, String> {
        if self.0.len() == 64 && self.0.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(self)
        } else {
            Err(format!(
                "Invalid SHA256 hash: expected 64 hex chars, got '{}'",
                self.0
            ))
        }
    }

    /// True when the feed did not publish a digest for this file.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the inner hex string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
