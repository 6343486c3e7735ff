//! Pending-pool hygiene.

use quartz_store::StateStore;
use quartz_types::Hash32;
use tracing::info;

/// Seam for the mempool collaborator: each pending transaction knows how to
/// re-validate itself against the committed ledger (structural and signature
/// checks live there, not in this core).
pub trait PendingValidate {
    fn revalidate(&self, ledger: &dyn StateStore) -> bool;
    fn tx_hash(&self) -> Hash32;
}

/// Drop pool entries that no longer validate against the committed ledger.
///
/// Returns true when every entry passed. Does not mutate ledger state and
/// runs independently of block application.
pub fn validate_pending_pool<T: PendingValidate>(
    pool: &mut Vec<T>,
    ledger: &dyn StateStore,
) -> bool {
    let mut all_valid = true;
    pool.retain(|tx| {
        let valid = tx.revalidate(ledger);
        if !valid {
            info!(tx = %tx.tx_hash(), "pending transaction failed revalidation; removed from pool");
            all_valid = false;
        }
        valid
    });
    all_valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartz_store::{AccountRecord, MemoryStore};
    use quartz_types::Address;

    /// Minimal pool entry: valid while the sender's committed nonce is below
    /// the transaction's nonce.
    struct PoolTx {
        from: Address,
        nonce: u64,
        hash: Hash32,
    }

    impl PendingValidate for PoolTx {
        fn revalidate(&self, ledger: &dyn StateStore) -> bool {
            ledger.get_account(&self.from).nonce < self.nonce
        }

        fn tx_hash(&self) -> Hash32 {
            self.hash
        }
    }

    #[test]
    fn stale_entries_are_removed() {
        let store = MemoryStore::new();
        let alice = Address::new("qz_alice");
        store
            .put_account(
                &alice,
                &AccountRecord {
                    nonce: 2,
                    balance: 0,
                    used_pubkey_hashes: vec![],
                },
            )
            .unwrap();

        let mut pool = vec![
            PoolTx {
                from: alice.clone(),
                nonce: 1, // already spent
                hash: Hash32::new([1u8; 32]),
            },
            PoolTx {
                from: alice.clone(),
                nonce: 3, // still ahead of committed state
                hash: Hash32::new([2u8; 32]),
            },
        ];

        assert!(!validate_pending_pool(&mut pool, &store));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].nonce, 3);

        // second pass is clean
        assert!(validate_pending_pool(&mut pool, &store));
    }
}
