//! The staking registry.
//!
//! Owns the active and next-epoch staker lists, the epoch seed derived from
//! staker reveals, the reveal-timing gate that staggers when stake tiers may
//! disclose randomness, and the end-of-epoch rotation.

pub mod list;
pub mod registry;
pub mod reveal;
pub mod seed;

pub use list::StakerList;
pub use registry::StakingRegistry;
pub use reveal::{apply_reveal, reveal_threshold_block, RevealOutcome};
pub use seed::compute_seed;
