//! The per-block diff map.
//!
//! All account reads and writes during validation of a single block go
//! through this working copy, never the store, guaranteeing isolation until
//! commit. The map is owned solely by the in-progress validation call and is
//! either bulk-committed or dropped whole.

use quartz_store::{AccountRecord, StateStore, StoreError};
use quartz_types::Address;
use std::collections::HashMap;

/// Working copy of every account record touched by the block being
/// validated, seeded lazily from the committed store.
pub struct DiffMap<'a, S: StateStore> {
    store: &'a S,
    entries: HashMap<Address, AccountRecord>,
}

impl<'a, S: StateStore> DiffMap<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            entries: HashMap::new(),
        }
    }

    /// Ensure the address is loaded into the diff map.
    pub fn touch(&mut self, address: &Address) {
        self.get_mut(address);
    }

    /// Mutable access to an account's working record, loading the committed
    /// record (or the zero default) on first reference.
    pub fn get_mut(&mut self, address: &Address) -> &mut AccountRecord {
        let Self { store, entries } = self;
        entries
            .entry(address.clone())
            .or_insert_with(|| store.get_account(address))
    }

    /// Read-only view of a working record already in the map.
    pub fn get(&self, address: &Address) -> Option<&AccountRecord> {
        self.entries.get(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist every touched record to the store. Consumes the map; this is
    /// the only path by which diffed state reaches the committed ledger.
    pub fn commit(self) -> Result<(), StoreError> {
        for (address, record) in &self.entries {
            self.store.put_account(address, record)?;
        }
        Ok(())
    }
}
