//! An ordinary value transfer.

use quartz_crypto::pubkey_fingerprint;
use quartz_types::{Address, Hash32, PubkeyFingerprint};
use serde::{Deserialize, Serialize};

/// A value transfer between two addresses, signed with a one-time key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferTx {
    pub from: Address,
    pub to: Address,
    pub amount: u64,
    /// Must be exactly the sender's committed nonce + 1.
    pub nonce: u64,
    /// One-time-signature public-key material.
    pub public_key: Vec<u8>,
    pub tx_hash: Hash32,
}

impl TransferTx {
    /// Fingerprint of the one-time key spent by this transaction.
    pub fn fingerprint(&self) -> PubkeyFingerprint {
        pubkey_fingerprint(&self.public_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable() {
        let tx = TransferTx {
            from: Address::new("qz_a"),
            to: Address::new("qz_b"),
            amount: 10,
            nonce: 1,
            public_key: vec![1, 2, 3],
            tx_hash: Hash32::ZERO,
        };
        assert_eq!(tx.fingerprint(), tx.fingerprint());
        assert_eq!(tx.fingerprint(), pubkey_fingerprint(&[1, 2, 3]));
    }
}
