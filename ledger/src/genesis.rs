//! The genesis block's declared state, as supplied by the chain driver.

use quartz_store::{AccountRecord, StateStore, StoreError};
use quartz_types::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// Declared account state and staker set of block 0.
///
/// The chain driver owns genesis creation and serialization; the validator
/// consumes this view for the bootstrap membership check and the replay
/// rebuilder consumes it to seed a wiped ledger.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenesisBlock {
    /// Initial account records, in declaration order.
    pub accounts: Vec<(Address, AccountRecord)>,
    /// Addresses eligible to stake in epoch 0.
    pub stakers: HashSet<Address>,
}

impl GenesisBlock {
    pub fn has_staker(&self, address: &Address) -> bool {
        self.stakers.contains(address)
    }

    /// Write the declared account state into the store.
    pub fn seed_store(&self, store: &dyn StateStore) -> Result<(), StoreError> {
        info!(accounts = self.accounts.len(), "seeding ledger from genesis state");
        for (address, record) in &self.accounts {
            store.put_account(address, record)?;
        }
        Ok(())
    }
}
