//! Stake registration / reveal transactions.

use quartz_crypto::pubkey_fingerprint;
use quartz_types::{Address, Hash32, PubkeyFingerprint, StakeEntry};
use serde::{Deserialize, Serialize};

/// A staking transaction: registers a commitment for the next epoch and,
/// once the reveal-timing gate allows, discloses the corresponding reveal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StakeTx {
    pub from: Address,
    /// Commitment published at registration.
    pub reveal_hash: Hash32,
    /// The reveal, present only once the staker chooses to disclose it.
    pub first_hash: Option<Hash32>,
    /// Stake deposit backing the registration.
    pub deposit_balance: u64,
    /// One-time-signature public-key material.
    pub public_key: Vec<u8>,
}

impl StakeTx {
    /// Fingerprint of the one-time key spent by this transaction.
    pub fn fingerprint(&self) -> PubkeyFingerprint {
        pubkey_fingerprint(&self.public_key)
    }

    /// Build the registry entry this transaction introduces.
    pub fn to_entry(&self, stake_nonce: u64) -> StakeEntry {
        StakeEntry {
            address: self.from.clone(),
            reveal_hash: self.reveal_hash,
            stake_nonce,
            first_hash: self.first_hash,
            deposit_balance: self.deposit_balance,
        }
    }
}
