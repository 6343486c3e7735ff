//! Per-address account record.

use quartz_types::PubkeyFingerprint;
use serde::{Deserialize, Serialize};

/// Ledger state of one address: transaction nonce, balance and every
/// one-time-signature fingerprint ever spent from it.
///
/// Records are created lazily with all-zero defaults on first reference and
/// never deleted. `used_pubkey_hashes` has set semantics; insertion order is
/// irrelevant for correctness but it is persisted as a sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Monotonic counter of transactions originated by this address.
    pub nonce: u64,
    /// Non-negative balance at every committed state.
    pub balance: u64,
    pub used_pubkey_hashes: Vec<PubkeyFingerprint>,
}

impl AccountRecord {
    /// Whether this fingerprint was already spent from this address.
    pub fn has_used(&self, fingerprint: &PubkeyFingerprint) -> bool {
        self.used_pubkey_hashes.contains(fingerprint)
    }

    /// Record a spent fingerprint. A fingerprint never appears twice.
    pub fn record_used(&mut self, fingerprint: PubkeyFingerprint) {
        if !self.has_used(&fingerprint) {
            self.used_pubkey_hashes.push(fingerprint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero_record() {
        let record = AccountRecord::default();
        assert_eq!(record.nonce, 0);
        assert_eq!(record.balance, 0);
        assert!(record.used_pubkey_hashes.is_empty());
    }

    #[test]
    fn record_used_is_set_like() {
        let mut record = AccountRecord::default();
        let fp = PubkeyFingerprint::new([5u8; 32]);
        record.record_used(fp);
        record.record_used(fp);
        assert_eq!(record.used_pubkey_hashes.len(), 1);
        assert!(record.has_used(&fp));
    }
}
