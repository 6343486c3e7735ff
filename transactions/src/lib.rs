//! Transaction and candidate-block types consumed by the validator.
//!
//! Structural and signature validation of transactions belongs to the
//! mempool collaborator; the validator only applies the ledger rules
//! (balance, nonce, one-time-key reuse) against these views.

pub mod block;
pub mod stake;
pub mod transfer;

pub use block::Block;
pub use stake::StakeTx;
pub use transfer::TransferTx;
