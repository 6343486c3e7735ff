//! Block state-transition validation and commit.
//!
//! Given a candidate block, decide whether it legally transforms the current
//! account ledger and staking registry into the next state, and if so commit
//! every mutation atomically. Validation works against a per-block diff map;
//! nothing touches the durable store until the commit phase, so a rejected
//! block leaves the committed state untouched.

pub mod apply;
pub mod diff;
pub mod error;
pub mod genesis;
pub mod oracle;
pub mod pool;
pub mod replay;
pub mod serialized;

pub use apply::{ApplyContext, StateMachine};
pub use diff::DiffMap;
pub use error::InvalidBlockReason;
pub use genesis::GenesisBlock;
pub use oracle::{KeyChain, NoopKeyChain, ScoreOracle};
pub use pool::{validate_pending_pool, PendingValidate};
pub use replay::rebuild_from_genesis;
pub use serialized::SerializedStateMachine;
