//! In-memory state store.
//!
//! Backs tests and single-process nodes. Values are bincode-encoded so the
//! backend exercises the same serialization path a durable engine would.
//! The `unavailable` flag injects backend failures for exercising the
//! store-unavailable handling in callers.

use crate::account::AccountRecord;
use crate::error::StoreError;
use crate::state::StateStore;
use quartz_types::{Address, EpochSeed, StakeEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

const ACCOUNT_PREFIX: &str = "account:";
const STAKE_LIST_KEY: &str = "stake_list";
const NEXT_STAKE_LIST_KEY: &str = "next_stake_list";
const EPOCH_SEED_KEY: &str = "epoch_seed";
const BLOCK_HEIGHT_KEY: &str = "blockheight";

/// In-memory [`StateStore`] backend.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// While set, every read and write fails with a backend error.
    pub fn set_unavailable(&self, flag: bool) {
        self.unavailable.store(flag, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(StoreError::Backend("store offline".into()));
        }
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.check_available()?;
        let entries = self.lock()?;
        entries.get(key).map(|bytes| decode(bytes)).transpose()
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        self.check_available()?;
        let encoded = encode(value)?;
        self.lock()?.insert(key.to_owned(), encoded);
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(value).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    bincode::deserialize(bytes).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn account_key(address: &Address) -> String {
    format!("{ACCOUNT_PREFIX}{address}")
}

impl StateStore for MemoryStore {
    fn try_get_account(&self, address: &Address) -> Result<Option<AccountRecord>, StoreError> {
        self.read(&account_key(address))
    }

    fn put_account(&self, address: &Address, record: &AccountRecord) -> Result<(), StoreError> {
        self.write(&account_key(address), record)
    }

    fn stake_list(&self) -> Result<Vec<StakeEntry>, StoreError> {
        Ok(self.read(STAKE_LIST_KEY)?.unwrap_or_default())
    }

    fn put_stake_list(&self, entries: &[StakeEntry]) -> Result<(), StoreError> {
        self.write(STAKE_LIST_KEY, &entries)
    }

    fn next_stake_list(&self) -> Result<Vec<StakeEntry>, StoreError> {
        Ok(self.read(NEXT_STAKE_LIST_KEY)?.unwrap_or_default())
    }

    fn put_next_stake_list(&self, entries: &[StakeEntry]) -> Result<(), StoreError> {
        self.write(NEXT_STAKE_LIST_KEY, &entries)
    }

    fn epoch_seed(&self) -> Result<Option<EpochSeed>, StoreError> {
        self.read(EPOCH_SEED_KEY)
    }

    fn put_epoch_seed(&self, seed: &EpochSeed) -> Result<(), StoreError> {
        self.write(EPOCH_SEED_KEY, seed)
    }

    fn block_height(&self) -> Result<u64, StoreError> {
        Ok(self.read(BLOCK_HEIGHT_KEY)?.unwrap_or(0))
    }

    fn put_block_height(&self, height: u64) -> Result<(), StoreError> {
        self.write(BLOCK_HEIGHT_KEY, &height)
    }

    fn wipe_accounts(&self) -> Result<(), StoreError> {
        self.check_available()?;
        self.lock()?.retain(|key, _| !key.starts_with(ACCOUNT_PREFIX));
        Ok(())
    }
}
