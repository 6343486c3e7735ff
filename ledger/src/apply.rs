//! The block state-transition validator.

use crate::diff::DiffMap;
use crate::error::InvalidBlockReason;
use crate::genesis::GenesisBlock;
use crate::oracle::{KeyChain, ScoreOracle};
use crate::pool::{validate_pending_pool, PendingValidate};
use quartz_crypto::reveal_digest;
use quartz_staking::{apply_reveal, reveal_threshold_block, RevealOutcome, StakingRegistry};
use quartz_store::{StateStore, StoreError};
use quartz_transactions::Block;
use quartz_types::{Address, ChainParams, StakeEntry};
use tracing::{debug, info, warn};

/// Checked balance credit. The original ledger ran on unbounded integers;
/// with fixed-width balances a credit that would wrap rejects the block.
pub(crate) fn credited(
    address: &Address,
    balance: u64,
    amount: u64,
) -> Result<u64, InvalidBlockReason> {
    balance
        .checked_add(amount)
        .ok_or_else(|| InvalidBlockReason::BalanceOverflow {
            address: address.clone(),
            balance,
            amount,
        })
}

/// What the chain driver supplies alongside a candidate block.
pub struct ApplyContext<'a> {
    /// Declared genesis state, consulted by the bootstrap path.
    pub genesis: &'a GenesisBlock,
    /// Current committed chain height; the height marker is persisted as
    /// `chain_height + 1` on success.
    pub chain_height: u64,
}

/// Validates candidate blocks against the committed ledger and staking
/// registry, committing the resulting diff atomically.
///
/// Block application is a strictly sequential single-writer state machine:
/// `apply_block` takes `&mut self` so at most one application can be in
/// flight per machine. Wrap in [`crate::SerializedStateMachine`] when the
/// machine is shared across threads.
pub struct StateMachine<S, O, K> {
    store: S,
    params: ChainParams,
    oracle: O,
    keychain: K,
}

impl<S, O, K> StateMachine<S, O, K>
where
    S: StateStore,
    O: ScoreOracle,
    K: KeyChain,
{
    pub fn new(store: S, params: ChainParams, oracle: O, keychain: K) -> Self {
        Self {
            store,
            params,
            oracle,
            keychain,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    /// Committed balance of an address.
    pub fn balance(&self, address: &Address) -> u64 {
        self.store.get_account(address).balance
    }

    /// Committed transaction nonce of an address.
    pub fn nonce(&self, address: &Address) -> u64 {
        self.store.get_account(address).nonce
    }

    /// Committed chain-height marker.
    pub fn block_height(&self) -> Result<u64, StoreError> {
        self.store.block_height()
    }

    /// Drop pending transactions that no longer validate against the
    /// committed ledger. Read-only with respect to ledger state.
    pub fn validate_pending_pool<T: PendingValidate>(&self, pool: &mut Vec<T>) -> bool {
        validate_pending_pool(pool, &self.store)
    }

    /// Validate a candidate block and, if valid, commit every resulting
    /// mutation. Any rejection leaves the committed state untouched.
    pub fn apply_block(
        &mut self,
        ctx: &ApplyContext<'_>,
        block: &Block,
    ) -> Result<(), InvalidBlockReason> {
        let header = &block.header;

        // Registry retrieval must distinguish "empty" from "store down".
        let mut registry = StakingRegistry::load(&self.store)?;

        // Working copy of every touched account; isolation until commit.
        let mut diff = DiffMap::new(&self.store);
        diff.touch(&header.stake_selector);
        for st in &block.stake_transactions {
            diff.touch(&st.from);
        }
        for tx in &block.transactions {
            diff.touch(&tx.from);
            diff.touch(&tx.to);
        }

        let blocks_left = self
            .params
            .blocks_left_in_epoch(header.block_number, header.epoch);

        if header.block_number == 1 {
            self.bootstrap(&mut registry, &mut diff, block, ctx)?;
        } else {
            self.advance_selector(&mut registry, block)?;
            self.process_stake_transactions(&mut registry, &mut diff, block);
        }

        // Ordinary transactions, strictly in block order, against the diff
        // map so multiple transactions from one sender chain correctly.
        for tx in &block.transactions {
            let fingerprint = tx.fingerprint();
            let sender = diff.get_mut(&tx.from);

            if sender.balance < tx.amount {
                return Err(InvalidBlockReason::InsufficientBalance {
                    tx: tx.tx_hash,
                    address: tx.from.clone(),
                    balance: sender.balance,
                    amount: tx.amount,
                });
            }
            if tx.nonce != sender.nonce + 1 {
                return Err(InvalidBlockReason::NonceMismatch {
                    tx: tx.tx_hash,
                    address: tx.from.clone(),
                    expected: sender.nonce + 1,
                    actual: tx.nonce,
                });
            }
            if sender.has_used(&fingerprint) {
                return Err(InvalidBlockReason::PubkeyReuse {
                    tx: tx.tx_hash,
                    address: tx.from.clone(),
                    fingerprint,
                });
            }

            sender.nonce += 1;
            sender.balance -= tx.amount;
            sender.record_used(fingerprint);
            let recipient = diff.get_mut(&tx.to);
            recipient.balance = credited(&tx.to, recipient.balance, tx.amount)?;
        }

        // Coinbase: not subject to nonce or reuse checks.
        let selector = diff.get_mut(&header.stake_selector);
        selector.balance = credited(&header.stake_selector, selector.balance, header.block_reward)?;

        // Commit phase. From here on every step runs to completion.
        diff.commit()?;
        registry.next.sort_by_deposit();
        self.store.put_stake_list(registry.active.entries())?;
        self.store.put_next_stake_list(registry.next.entries())?;
        if header.block_number == 1 {
            self.store.put_epoch_seed(&registry.seed)?;
        }

        if blocks_left == 1 {
            registry.rotate_epoch();
            self.store.put_stake_list(registry.active.entries())?;
            self.store.put_next_stake_list(registry.next.entries())?;
            self.keychain.regenerate(header.epoch + 1);
        }

        self.store.put_block_height(ctx.chain_height + 1)?;
        info!(
            block = header.block_number,
            header_hash = %header.header_hash,
            transactions = block.transaction_count(),
            "block passed state checks"
        );
        Ok(())
    }

    /// Block 1: populate the registry from genesis-eligible stakers, derive
    /// the epoch seed and check the claimed selector against the scoring
    /// oracle's ordering.
    fn bootstrap(
        &self,
        registry: &mut StakingRegistry,
        diff: &mut DiffMap<'_, S>,
        block: &Block,
        ctx: &ApplyContext<'_>,
    ) -> Result<(), InvalidBlockReason> {
        let header = &block.header;

        for st in &block.stake_transactions {
            let in_genesis = ctx.genesis.has_staker(&st.from);
            let is_selector = st.from == header.stake_selector;

            if is_selector && !in_genesis {
                warn!(address = %st.from, "designated staker not in genesis");
                return Err(InvalidBlockReason::UnknownStaker {
                    address: st.from.clone(),
                });
            }

            let entry = st.to_entry(if is_selector { 1 } else { 0 });
            let accepted = if in_genesis {
                registry.active.push(entry)
            } else {
                registry.next.push(StakeEntry {
                    stake_nonce: 0,
                    ..entry
                })
            };
            if !accepted {
                warn!(address = %st.from, "duplicate bootstrap stake transaction ignored");
            }

            diff.get_mut(&st.from).record_used(st.fingerprint());
        }

        let seed = registry.reseed_from_active();

        // Order the active set by the external scoring oracle; balances are
        // the committed ones, not the diff map's.
        let mut ordered: Vec<(u128, &StakeEntry)> = registry
            .active
            .iter()
            .map(|entry| {
                let score = self.oracle.score(
                    &entry.address,
                    &reveal_digest(&entry.reveal_hash),
                    self.store.get_account(&entry.address).balance,
                    &seed,
                );
                (score, entry)
            })
            .collect();
        ordered.sort_by_key(|(score, _)| *score);

        match ordered.first() {
            Some((_, top)) if top.address == header.stake_selector => {}
            Some((_, top)) => {
                return Err(InvalidBlockReason::StakeSelectorMismatch {
                    expected: top.address.clone(),
                    claimed: header.stake_selector.clone(),
                });
            }
            None => {
                return Err(InvalidBlockReason::UnknownStaker {
                    address: header.stake_selector.clone(),
                });
            }
        }

        self.keychain.regenerate(0);
        Ok(())
    }

    /// Normal path: the claimed selector must be active, and its stake nonce
    /// must advance to exactly the claimed value.
    fn advance_selector(
        &self,
        registry: &mut StakingRegistry,
        block: &Block,
    ) -> Result<(), InvalidBlockReason> {
        let header = &block.header;
        info!(
            block = header.block_number,
            epoch = header.epoch,
            stake_nonce = header.stake_nonce,
            selector = %header.stake_selector,
            "applying block"
        );

        let Some(entry) = registry.active.get_mut(&header.stake_selector) else {
            return Err(InvalidBlockReason::UnknownStaker {
                address: header.stake_selector.clone(),
            });
        };
        entry.stake_nonce += 1;
        if entry.stake_nonce != header.stake_nonce {
            return Err(InvalidBlockReason::StakeNonceMismatch {
                selector: header.stake_selector.clone(),
                expected: entry.stake_nonce,
                claimed: header.stake_nonce,
            });
        }
        Ok(())
    }

    /// Normal path stake transactions: upsert into the next-epoch list, with
    /// reveal disclosure gated by the staggered timing rule. A too-early
    /// reveal is a soft rejection — logged and skipped, never fatal.
    fn process_stake_transactions(
        &self,
        registry: &mut StakingRegistry,
        diff: &mut DiffMap<'_, S>,
        block: &Block,
    ) {
        let header = &block.header;
        let epoch_block = self
            .params
            .epoch_block_number(header.block_number, header.epoch);

        for st in &block.stake_transactions {
            let threshold = reveal_threshold_block(&registry.next, &st.from, &self.params);
            if let Some(entry) = registry.next.get_mut(&st.from) {
                match apply_reveal(entry, st.first_hash.as_ref(), epoch_block, threshold) {
                    RevealOutcome::Accepted => {
                        debug!(address = %st.from, "reveal recorded for next epoch");
                    }
                    RevealOutcome::RejectedTooEarly {
                        epoch_block,
                        threshold_block,
                    } => {
                        warn!(
                            address = %st.from,
                            epoch_block,
                            threshold_block,
                            "reveal arrived before threshold; skipped"
                        );
                    }
                    RevealOutcome::NotApplicable => {}
                }
            } else {
                registry.next.push(st.to_entry(0));
            }

            // Recorded regardless of the reveal outcome.
            diff.get_mut(&st.from).record_used(st.fingerprint());
        }
    }
}
