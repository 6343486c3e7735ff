//! Hashing primitives for the Quartz ledger.
//!
//! One-time-signature fingerprints and reveal digests are SHA-256; the
//! signature scheme itself lives in the wallet collaborator, outside this
//! workspace.

pub mod hash;

pub use hash::{pubkey_fingerprint, reveal_digest, sha256, sha256_multi};
