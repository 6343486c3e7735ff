//! The staking registry: active and next-epoch staker lists plus the seed.

use crate::list::StakerList;
use crate::seed::compute_seed;
use quartz_store::{StateStore, StoreError};
use quartz_types::EpochSeed;
use tracing::info;

/// This epoch's eligible leaders (`active`), the candidates being assembled
/// for the following epoch (`next`), and the epoch seed.
///
/// Loaded from the durable store at the start of each block application and
/// persisted back as part of the block commit. A store failure during load
/// surfaces as an error; an empty registry and an unavailable store are
/// distinct states.
#[derive(Clone, Debug, Default)]
pub struct StakingRegistry {
    pub active: StakerList,
    pub next: StakerList,
    pub seed: EpochSeed,
}

impl StakingRegistry {
    /// Load both staker lists and the seed from the store.
    pub fn load(store: &dyn StateStore) -> Result<Self, StoreError> {
        Ok(Self {
            active: StakerList::from_entries(store.stake_list()?),
            next: StakerList::from_entries(store.next_stake_list()?),
            seed: store.epoch_seed()?.unwrap_or(EpochSeed::ZERO),
        })
    }

    /// Recompute the seed from the active set and record it on the registry.
    pub fn reseed_from_active(&mut self) -> EpochSeed {
        self.seed = compute_seed(self.active.iter());
        self.seed
    }

    /// End-of-epoch rotation: the revealed subset of `next` becomes the new
    /// active set, unrevealed candidates are dropped, and `next` is cleared.
    pub fn rotate_epoch(&mut self) {
        let revealed: Vec<_> = self
            .next
            .iter()
            .filter(|entry| entry.is_revealed())
            .cloned()
            .collect();
        info!(
            activated = revealed.len(),
            dropped = self.next.len() - revealed.len(),
            "epoch change: activating next staker list"
        );
        self.active = StakerList::from_entries(revealed);
        self.next = StakerList::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartz_store::MemoryStore;
    use quartz_types::{Address, Hash32, StakeEntry};

    fn entry(name: &str, first_hash: Option<Hash32>) -> StakeEntry {
        StakeEntry {
            address: Address::new(format!("qz_{name}")),
            reveal_hash: Hash32::new([1u8; 32]),
            stake_nonce: 0,
            first_hash,
            deposit_balance: 10,
        }
    }

    #[test]
    fn load_from_empty_store() {
        let store = MemoryStore::new();
        let registry = StakingRegistry::load(&store).unwrap();
        assert!(registry.active.is_empty());
        assert!(registry.next.is_empty());
        assert!(registry.seed.is_zero());
    }

    #[test]
    fn load_surfaces_store_failure() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        assert!(StakingRegistry::load(&store).is_err());
    }

    #[test]
    fn rotation_drops_unrevealed_and_clears_next() {
        let mut registry = StakingRegistry::default();
        registry.next = StakerList::from_entries(vec![
            entry("a", Some(Hash32::new([2u8; 32]))),
            entry("b", None),
            entry("c", Some(Hash32::new([3u8; 32]))),
        ]);

        registry.rotate_epoch();

        assert_eq!(registry.active.len(), 2);
        assert!(registry.active.contains(&Address::new("qz_a")));
        assert!(!registry.active.contains(&Address::new("qz_b")));
        assert!(registry.active.contains(&Address::new("qz_c")));
        assert!(registry.next.is_empty());
    }

    #[test]
    fn reseed_folds_active_reveals() {
        let mut registry = StakingRegistry::default();
        registry.active = StakerList::from_entries(vec![
            entry("a", Some(Hash32::new([0x01; 32]))),
            entry("b", Some(Hash32::new([0x02; 32]))),
        ]);
        let seed = registry.reseed_from_active();
        assert_eq!(seed.as_bytes()[0], 0x03);
        assert_eq!(registry.seed, seed);
    }
}
