//! Shared single-writer handle.
//!
//! Block application mutates shared staking and account state with
//! read-modify-write semantics that are unsafe under interleaving, so a
//! shared machine must serialize whole diff-build-and-commit sequences.
//! Read-only queries go against the last committed snapshot; the in-flight
//! diff map is never visible outside the applying call.

use crate::apply::{ApplyContext, StateMachine};
use crate::error::InvalidBlockReason;
use crate::oracle::{KeyChain, ScoreOracle};
use crate::pool::PendingValidate;
use quartz_store::{StateStore, StoreError};
use quartz_transactions::Block;
use quartz_types::Address;
use std::sync::{Arc, Mutex, MutexGuard};

/// `Arc<Mutex<StateMachine>>` wrapper: one `apply_block` in flight at a time.
pub struct SerializedStateMachine<S, O, K> {
    inner: Arc<Mutex<StateMachine<S, O, K>>>,
}

impl<S, O, K> Clone for SerializedStateMachine<S, O, K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, O, K> SerializedStateMachine<S, O, K>
where
    S: StateStore,
    O: ScoreOracle,
    K: KeyChain,
{
    pub fn new(machine: StateMachine<S, O, K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StateMachine<S, O, K>> {
        // A poisoning panic cannot leave a partial commit behind: the diff
        // map dies with the panicking call. Recover the guard and continue.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Serialized block application; see [`StateMachine::apply_block`].
    pub fn apply_block(
        &self,
        ctx: &ApplyContext<'_>,
        block: &Block,
    ) -> Result<(), InvalidBlockReason> {
        self.lock().apply_block(ctx, block)
    }

    pub fn validate_pending_pool<T: PendingValidate>(&self, pool: &mut Vec<T>) -> bool {
        self.lock().validate_pending_pool(pool)
    }

    /// Committed balance of an address.
    pub fn balance(&self, address: &Address) -> u64 {
        self.lock().balance(address)
    }

    /// Committed transaction nonce of an address.
    pub fn nonce(&self, address: &Address) -> u64 {
        self.lock().nonce(address)
    }

    /// Committed chain-height marker.
    pub fn block_height(&self) -> Result<u64, StoreError> {
        self.lock().block_height()
    }
}
