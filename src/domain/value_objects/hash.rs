//! Content Hash Value Object
//!
//! A validated, immutable digest of an asset's raw bytes.
//! The manifest and the service worker key cached responses by it.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps the lower-case hex encoding of a SHA-256 digest.
/// Unlike a tagged hash, the manifest contract carries bare hex, so no
/// algorithm prefix is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    /// Length of the hex encoding
    pub const HEX_LEN: usize = 64;

    /// Compute the hash of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
