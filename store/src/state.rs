//! The state-store trait.

use crate::account::AccountRecord;
use crate::error::StoreError;
use quartz_types::{Address, EpochSeed, StakeEntry};
use tracing::warn;

/// Durable key-value state behind the ledger: account records, the two
/// staker lists, the epoch seed and the block-height marker.
///
/// Failure semantics differ by key class and are part of the protocol:
/// account lookups degrade to the zero record (absence and backend failure
/// are equivalent there), but staker lists, the epoch seed and the height
/// marker must surface backend failures — an empty registry and an
/// unavailable store are not the same state, and conflating them would let
/// a corrupted node behave as if it were at genesis.
pub trait StateStore {
    /// Raw account lookup; `Ok(None)` when the address has no record yet.
    fn try_get_account(&self, address: &Address) -> Result<Option<AccountRecord>, StoreError>;

    /// Idempotent overwrite of an account record.
    fn put_account(&self, address: &Address, record: &AccountRecord) -> Result<(), StoreError>;

    /// This epoch's active staker list. Absent key reads as empty.
    fn stake_list(&self) -> Result<Vec<StakeEntry>, StoreError>;

    fn put_stake_list(&self, entries: &[StakeEntry]) -> Result<(), StoreError>;

    /// The next-epoch candidate list. Absent key reads as empty.
    fn next_stake_list(&self) -> Result<Vec<StakeEntry>, StoreError>;

    fn put_next_stake_list(&self, entries: &[StakeEntry]) -> Result<(), StoreError>;

    fn epoch_seed(&self) -> Result<Option<EpochSeed>, StoreError>;

    fn put_epoch_seed(&self, seed: &EpochSeed) -> Result<(), StoreError>;

    /// Height marker of the last committed block; 0 for a fresh database.
    fn block_height(&self) -> Result<u64, StoreError>;

    fn put_block_height(&self, height: u64) -> Result<(), StoreError>;

    /// Delete every account record. Used by the chain replay rebuilder.
    fn wipe_accounts(&self) -> Result<(), StoreError>;

    /// Account lookup that never fails the caller: an absent record and a
    /// backend failure both read as the default zero record. Degraded reads
    /// are logged.
    fn get_account(&self, address: &Address) -> AccountRecord {
        match self.try_get_account(address) {
            Ok(Some(record)) => record,
            Ok(None) => AccountRecord::default(),
            Err(err) => {
                warn!(address = %address, error = %err, "account read degraded to zero record");
                AccountRecord::default()
            }
        }
    }
}
