//! Cryptographic hash types: generic 32-byte hashes and one-time-signature
//! public-key fingerprints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte SHA-256 hash.
///
/// Used for reveal commitments, reveal digests and block header hashes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash32([u8; 32]);

impl Hash32 {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash32({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

/// A fingerprint of one-time-signature public-key material.
///
/// The signature scheme's security depends on never reusing a key, so every
/// fingerprint ever spent from an address is recorded in its account record
/// and checked on each transaction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PubkeyFingerprint([u8; 32]);

impl PubkeyFingerprint {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for PubkeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubkeyFingerprint({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for PubkeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hash() {
        assert!(Hash32::ZERO.is_zero());
        assert!(!Hash32::new([1u8; 32]).is_zero());
    }

    #[test]
    fn display_is_full_hex() {
        let h = Hash32::new([0xab; 32]);
        assert_eq!(h.to_string(), "ab".repeat(32));
    }

    #[test]
    fn fingerprint_equality() {
        let a = PubkeyFingerprint::new([7u8; 32]);
        let b = PubkeyFingerprint::new([7u8; 32]);
        let c = PubkeyFingerprint::new([8u8; 32]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
