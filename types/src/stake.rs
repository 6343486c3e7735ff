//! A single staker's registry entry.

use crate::address::Address;
use crate::hash::Hash32;
use serde::{Deserialize, Serialize};

/// One staker's entry in the active or next-epoch staker list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeEntry {
    pub address: Address,
    /// Commitment published at registration.
    pub reveal_hash: Hash32,
    /// Number of blocks this staker has produced.
    pub stake_nonce: u64,
    /// The reveal corresponding to `reveal_hash`, populated later subject to
    /// the reveal-timing gate. Once set it is never cleared.
    pub first_hash: Option<Hash32>,
    /// Stake deposit, used to rank reveal timing and order the persisted
    /// next-epoch list.
    pub deposit_balance: u64,
}

impl StakeEntry {
    /// Fill in the reveal. Returns false (and leaves the entry untouched)
    /// if a reveal is already present.
    pub fn set_first_hash(&mut self, reveal: Hash32) -> bool {
        if self.first_hash.is_some() {
            return false;
        }
        self.first_hash = Some(reveal);
        true
    }

    /// Whether this staker has disclosed its reveal.
    pub fn is_revealed(&self) -> bool {
        self.first_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> StakeEntry {
        StakeEntry {
            address: Address::new("qz_staker"),
            reveal_hash: Hash32::new([1u8; 32]),
            stake_nonce: 0,
            first_hash: None,
            deposit_balance: 100,
        }
    }

    #[test]
    fn first_hash_set_once() {
        let mut e = entry();
        assert!(!e.is_revealed());
        assert!(e.set_first_hash(Hash32::new([2u8; 32])));
        assert!(e.is_revealed());

        // never cleared or replaced
        assert!(!e.set_first_hash(Hash32::new([3u8; 32])));
        assert_eq!(e.first_hash, Some(Hash32::new([2u8; 32])));
    }
}
