//! The candidate block handed to the validator.

use crate::stake::StakeTx;
use crate::transfer::TransferTx;
use quartz_types::BlockHeader;
use serde::{Deserialize, Serialize};

/// A candidate block: header plus its stake and ordinary transactions.
///
/// Ordinary transactions are applied strictly in the order they appear,
/// so multiple transactions from one sender chain within the block.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub stake_transactions: Vec<StakeTx>,
    pub transactions: Vec<TransferTx>,
}

impl Block {
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}
