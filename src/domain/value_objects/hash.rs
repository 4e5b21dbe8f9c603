//! Content fingerprint of generated text
//!
//! The generator compares the fingerprint of freshly rendered output with the
//! one of the file on disk and skips the write when they agree.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 digest of a rendered document.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    pub fn of(text: &str) -> Self {
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&Sha256::digest(text.as_bytes()));
        Self(digest)
    }

    /// True when `other` would hash to the same digest.
    pub fn matches(&self, other: &str) -> bool {
        *self == Self::of(other)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self)
    }
}
