//! Fundamental types for the Quartz ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: addresses, hashes, one-time-signature fingerprints, the epoch
//! seed, the consumed block header, stake entries and protocol parameters.

pub mod address;
pub mod block;
pub mod hash;
pub mod params;
pub mod seed;
pub mod stake;

pub use address::Address;
pub use block::BlockHeader;
pub use hash::{Hash32, PubkeyFingerprint};
pub use params::ChainParams;
pub use seed::EpochSeed;
pub use stake::StakeEntry;
