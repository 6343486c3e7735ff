//! Chain replay rebuilder.
//!
//! Reconstructs the account ledger from genesis for disaster recovery and
//! resync. This is deliberately a narrower code path than block application:
//! it replays only the ordinary-transaction balance/nonce/reuse rules plus
//! the coinbase reward, and does not reconstruct the staking registry. Keep
//! it behaviorally distinct from `apply_block`; the scope difference is
//! intentional (accounts-only recovery) and documented in DESIGN.md.

use crate::apply::credited;
use crate::error::InvalidBlockReason;
use crate::genesis::GenesisBlock;
use quartz_store::StateStore;
use quartz_transactions::Block;
use tracing::info;

/// Wipe the account ledger, seed it from the genesis block's declared state
/// and replay every block's ordinary transactions and coinbase reward.
///
/// The bootstrap block (height 1) carries only stake registrations, so the
/// accounts-only replay starts at height 2.
pub fn rebuild_from_genesis<S: StateStore>(
    store: &S,
    genesis: &GenesisBlock,
    blocks: &[Block],
) -> Result<(), InvalidBlockReason> {
    store.wipe_accounts()?;
    genesis.seed_store(store)?;

    for block in blocks.iter().filter(|b| b.header.block_number >= 2) {
        let header = &block.header;

        // Coinbase first, then the block's transactions.
        let mut selector = store.get_account(&header.stake_selector);
        selector.balance = credited(&header.stake_selector, selector.balance, header.block_reward)?;
        store.put_account(&header.stake_selector, &selector)?;

        for tx in &block.transactions {
            let fingerprint = tx.fingerprint();
            let mut sender = store.get_account(&tx.from);

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
            // Sender written before the recipient is read, in case from == to.
            store.put_account(&tx.from, &sender)?;

            let mut recipient = store.get_account(&tx.to);
            recipient.balance = credited(&tx.to, recipient.balance, tx.amount)?;
            store.put_account(&tx.to, &recipient)?;
        }

        info!(
            block = header.block_number,
            transactions = block.transaction_count(),
            "replayed"
        );
    }

    let height = blocks.last().map(|b| b.header.block_number).unwrap_or(0);
    store.put_block_height(height)?;
    Ok(())
}
