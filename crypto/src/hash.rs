//! SHA-256 hashing for fingerprints and reveal digests.

use quartz_types::{Hash32, PubkeyFingerprint};
use sha2::{Digest, Sha256};

/// Compute a SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Derive the one-time-signature fingerprint of public-key material.
pub fn pubkey_fingerprint(public_key: &[u8]) -> PubkeyFingerprint {
    PubkeyFingerprint::new(sha256(public_key))
}

/// Digest of a reveal commitment, fed to the scoring oracle.
///
/// The digest is taken over the hex encoding of the commitment so every
/// validator derives the same score input regardless of byte representation.
pub fn reveal_digest(reveal_hash: &Hash32) -> Hash32 {
    Hash32::new(sha256(hex::encode(reveal_hash.as_bytes()).as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_deterministic() {
        let h1 = sha256(b"hello quartz");
        let h2 = sha256(b"hello quartz");
        assert_eq!(h1, h2);
    }

    #[test]
    fn sha256_different_inputs() {
        assert_ne!(sha256(b"hello"), sha256(b"world"));
    }

    #[test]
    fn sha256_multi_equivalent() {
        let single = sha256(b"helloworld");
        let multi = sha256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn fingerprint_tracks_key_material() {
        let a = pubkey_fingerprint(b"ots-pubkey-a");
        let b = pubkey_fingerprint(b"ots-pubkey-b");
        assert_ne!(a, b);
        assert_eq!(a, pubkey_fingerprint(b"ots-pubkey-a"));
    }

    #[test]
    fn reveal_digest_differs_from_commitment() {
        let commitment = Hash32::new([0x11; 32]);
        let digest = reveal_digest(&commitment);
        assert_ne!(digest, commitment);
        assert_eq!(digest, reveal_digest(&commitment));
    }
}
