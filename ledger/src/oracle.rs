//! Seams for external collaborators.

use quartz_types::{Address, EpochSeed, Hash32};
use std::sync::Arc;

/// The scoring function used to rank stakers during bootstrap ordering.
///
/// Treated as a pure function: every validator must derive the same score
/// from the same inputs. Lower scores rank first. The implementation depends
/// on cryptographic reveal material outside this workspace's data model, so
/// it is consumed as an oracle rather than implemented here.
pub trait ScoreOracle {
    fn score(
        &self,
        address: &Address,
        reveal_digest: &Hash32,
        balance: u64,
        seed: &EpochSeed,
    ) -> u128;
}

/// Wallet collaborator: regenerates the one-time-signature key chain for an
/// epoch. Fire-and-forget; the ledger core never inspects the result.
pub trait KeyChain {
    fn regenerate(&self, epoch: u64);
}

/// Key-chain stub for nodes that validate without producing blocks.
pub struct NoopKeyChain;

impl KeyChain for NoopKeyChain {
    fn regenerate(&self, _epoch: u64) {}
}

impl<K: KeyChain + ?Sized> KeyChain for Arc<K> {
    fn regenerate(&self, epoch: u64) {
        (**self).regenerate(epoch);
    }
}

impl<O: ScoreOracle + ?Sized> ScoreOracle for Arc<O> {
    fn score(
        &self,
        address: &Address,
        reveal_digest: &Hash32,
        balance: u64,
        seed: &EpochSeed,
    ) -> u128 {
        (**self).score(address, reveal_digest, balance, seed)
    }
}
