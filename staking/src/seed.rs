//! Epoch seed derivation from staker reveals.

use quartz_types::{EpochSeed, StakeEntry};

/// Combine every staker's revealed first-hash into the epoch seed with a
/// bitwise-OR fold.
///
/// Stakers that have not revealed contribute nothing. The result is
/// independent of staker order.
pub fn compute_seed<'a>(stakers: impl IntoIterator<Item = &'a StakeEntry>) -> EpochSeed {
    let mut seed = EpochSeed::ZERO;
    for staker in stakers {
        if let Some(reveal) = &staker.first_hash {
            seed.merge(reveal);
        }
    }
    seed
}
