use quartz_store::StoreError;
use quartz_types::{Address, Hash32, PubkeyFingerprint};
use thiserror::Error;

/// Why a candidate block was rejected.
///
/// Every variant aborts the whole block with no partial commit; the chain
/// driver decides how to react. These are rejection reasons, not control
/// flow for anything else.
#[derive(Debug, Error)]
pub enum InvalidBlockReason {
    #[error("staker {address} not present in the expected staker set")]
    UnknownStaker { address: Address },

    #[error("bootstrap ordering selected {expected}, block claims {claimed}")]
    StakeSelectorMismatch { expected: Address, claimed: Address },

    #[error("stake nonce mismatch for {selector}: expected {expected}, block claims {claimed}")]
    StakeNonceMismatch {
        selector: Address,
        expected: u64,
        claimed: u64,
    },

    #[error("tx {tx}: sender {address} balance {balance} below amount {amount}")]
    InsufficientBalance {
        tx: Hash32,
        address: Address,
        balance: u64,
        amount: u64,
    },

    #[error("tx {tx}: nonce mismatch for {address}: expected {expected}, carries {actual}")]
    NonceMismatch {
        tx: Hash32,
        address: Address,
        expected: u64,
        actual: u64,
    },

    #[error("crediting {amount} to {address} overflows balance {balance}")]
    BalanceOverflow {
        address: Address,
        balance: u64,
        amount: u64,
    },

    #[error("tx {tx}: one-time pubkey reuse by {address}")]
    PubkeyReuse {
        tx: Hash32,
        address: Address,
        fingerprint: PubkeyFingerprint,
    },

    #[error("durable store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}
