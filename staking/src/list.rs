//! An ordered staker list with map-indexed lookup.
//!
//! Iteration order is observable protocol state (the bootstrap ordering
//! check and the persisted next-epoch list both depend on it), so entries
//! live in a `Vec`; the address index only accelerates membership lookups
//! that would otherwise scan the whole list.

use quartz_types::{Address, StakeEntry};
use std::collections::HashMap;
use tracing::warn;

/// Ordered collection of stake entries, at most one per address.
#[derive(Clone, Debug, Default)]
pub struct StakerList {
    entries: Vec<StakeEntry>,
    index: HashMap<Address, usize>,
}

impl StakerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from persisted entries. A duplicate address keeps the
    /// first occurrence and drops the rest.
    pub fn from_entries(entries: Vec<StakeEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            if !list.push(entry.clone()) {
                warn!(address = %entry.address, "dropping duplicate staker entry");
            }
        }
        list
    }

    /// Append an entry. Returns false without modifying the list if the
    /// address is already present.
    pub fn push(&mut self, entry: StakeEntry) -> bool {
        if self.index.contains_key(&entry.address) {
            return false;
        }
        self.index.insert(entry.address.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.index.contains_key(address)
    }

    pub fn get(&self, address: &Address) -> Option<&StakeEntry> {
        self.index.get(address).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, address: &Address) -> Option<&mut StakeEntry> {
        self.index.get(address).map(|&i| &mut self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StakeEntry> {
        self.entries.iter()
    }

    /// The entries in list order, as persisted.
    pub fn entries(&self) -> &[StakeEntry] {
        &self.entries
    }

    /// Stable sort ascending by deposit balance; ties keep list order.
    pub fn sort_by_deposit(&mut self) {
        self.entries.sort_by_key(|e| e.deposit_balance);
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.address.clone(), i))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartz_types::Hash32;

    fn entry(name: &str, deposit: u64) -> StakeEntry {
        StakeEntry {
            address: Address::new(format!("qz_{name}")),
            reveal_hash: Hash32::new([1u8; 32]),
            stake_nonce: 0,
            first_hash: None,
            deposit_balance: deposit,
        }
    }

    #[test]
    fn push_rejects_duplicate_address() {
        let mut list = StakerList::new();
        assert!(list.push(entry("a", 10)));
        assert!(!list.push(entry("a", 99)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(&Address::new("qz_a")).unwrap().deposit_balance, 10);
    }

    #[test]
    fn from_entries_keeps_first_duplicate() {
        let list = StakerList::from_entries(vec![entry("a", 10), entry("b", 20), entry("a", 30)]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(&Address::new("qz_a")).unwrap().deposit_balance, 10);
    }

    #[test]
    fn sort_by_deposit_is_stable() {
        let mut list =
            StakerList::from_entries(vec![entry("c", 20), entry("a", 10), entry("b", 20)]);
        list.sort_by_deposit();
        let order: Vec<&str> = list.iter().map(|e| e.address.as_str()).collect();
        // ties (c, b at 20) keep their original relative order
        assert_eq!(order, vec!["qz_a", "qz_c", "qz_b"]);
        // index survives the sort
        assert!(list.get(&Address::new("qz_b")).is_some());
    }

    #[test]
    fn get_mut_updates_entry() {
        let mut list = StakerList::from_entries(vec![entry("a", 10)]);
        list.get_mut(&Address::new("qz_a")).unwrap().stake_nonce = 5;
        assert_eq!(list.get(&Address::new("qz_a")).unwrap().stake_nonce, 5);
    }
}
