//! Chain parameters and epoch arithmetic.

use serde::{Deserialize, Serialize};

/// Protocol parameters every validating node must agree on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainParams {
    /// Fixed epoch length in blocks. The active staker set is stable for a
    /// whole epoch; rotation happens at the last block of the window.
    pub blocks_per_epoch: u64,
    /// Earliest epoch-relative block at which the lower half of next-epoch
    /// stakers (ranked by deposit) may disclose their first-hash reveal.
    pub low_staker_reveal_block: u64,
    /// Earliest epoch-relative block for the upper half.
    pub high_staker_reveal_block: u64,
}

impl ChainParams {
    /// Mainnet defaults.
    pub fn quartz_defaults() -> Self {
        Self {
            blocks_per_epoch: 100,
            low_staker_reveal_block: 20,
            high_staker_reveal_block: 40,
        }
    }

    /// Blocks remaining in the epoch after this block, counting this block.
    /// `1` means this is the last block of the epoch.
    pub fn blocks_left_in_epoch(&self, block_number: u64, epoch: u64) -> u64 {
        self.blocks_per_epoch
            .saturating_sub(self.epoch_block_number(block_number, epoch))
    }

    /// Position of a block within its epoch (1-based for the first block).
    pub fn epoch_block_number(&self, block_number: u64, epoch: u64) -> u64 {
        block_number.saturating_sub(epoch.saturating_mul(self.blocks_per_epoch))
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::quartz_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_arithmetic() {
        let params = ChainParams {
            blocks_per_epoch: 100,
            ..ChainParams::quartz_defaults()
        };
        assert_eq!(params.epoch_block_number(1, 0), 1);
        assert_eq!(params.blocks_left_in_epoch(1, 0), 99);
        assert_eq!(params.blocks_left_in_epoch(100, 0), 0);
        // last block of epoch 0 for rotation purposes
        assert_eq!(params.blocks_left_in_epoch(99, 0), 1);
        // second epoch
        assert_eq!(params.epoch_block_number(150, 1), 50);
        assert_eq!(params.blocks_left_in_epoch(150, 1), 50);
    }

    #[test]
    fn malformed_header_saturates() {
        let params = ChainParams::quartz_defaults();
        // epoch claims a window beyond the block number; no underflow
        assert_eq!(params.epoch_block_number(5, 3), 0);
        assert_eq!(params.blocks_left_in_epoch(5, 3), 100);
    }
}
