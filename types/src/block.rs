//! The block header consumed by the state-transition validator.
//!
//! Quartz does not own block production or serialization; this is the view
//! of a candidate header the chain driver hands to `apply_block`.

use crate::address::Address;
use crate::hash::Hash32;
use serde::{Deserialize, Serialize};

/// Header fields of a candidate block.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Height of this block on the chain.
    pub block_number: u64,
    /// Epoch this block claims to belong to.
    pub epoch: u64,
    /// The address designated as this block's producer.
    pub stake_selector: Address,
    /// The producer's claimed count of blocks produced, including this one.
    pub stake_nonce: u64,
    /// Coinbase reward credited to the stake selector.
    pub block_reward: u64,
    /// Hash of the serialized header (computed externally).
    pub header_hash: Hash32,
}
