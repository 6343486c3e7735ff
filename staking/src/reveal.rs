//! Reveal timing: the threshold rule and the gate itself.
//!
//! Stakers in the bottom half of the next-epoch list (ranked by deposit)
//! may disclose their reveal from an earlier epoch-relative block than the
//! top half. Staggering disclosure across stake tiers limits strategic
//! withholding of epoch-seed entropy.

use crate::list::StakerList;
use quartz_types::{Address, ChainParams, Hash32, StakeEntry};

/// Result of attempting to apply a reveal to a next-epoch entry.
///
/// `RejectedTooEarly` is a soft rejection: the containing block is still
/// valid, the reveal is simply not recorded. Callers log the outcome so the
/// behavior stays inspectable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The reveal was recorded on the entry.
    Accepted,
    /// The epoch-relative block has not reached the staker's threshold.
    RejectedTooEarly { epoch_block: u64, threshold_block: u64 },
    /// Nothing to do: no reveal supplied, or the entry already has one.
    NotApplicable,
}

/// The earliest epoch-relative block at which `address` may reveal.
///
/// Entries are ranked ascending by deposit balance (stable, ties keep list
/// order); the bottom half gets the low threshold, the rest the high one.
/// An address not present in the list gates at the low threshold.
pub fn reveal_threshold_block(next: &StakerList, address: &Address, params: &ChainParams) -> u64 {
    let mut ranked: Vec<&StakeEntry> = next.iter().collect();
    ranked.sort_by_key(|e| e.deposit_balance);

    match ranked.iter().position(|e| &e.address == address) {
        Some(position) if position >= ranked.len() / 2 => params.high_staker_reveal_block,
        _ => params.low_staker_reveal_block,
    }
}

/// Apply a reveal to an existing next-epoch entry, subject to the timing
/// gate: accepted only once `epoch_block >= threshold_block - 1`.
pub fn apply_reveal(
    entry: &mut StakeEntry,
    reveal: Option<&Hash32>,
    epoch_block: u64,
    threshold_block: u64,
) -> RevealOutcome {
    let Some(reveal) = reveal else {
        return RevealOutcome::NotApplicable;
    };
    if entry.first_hash.is_some() {
        return RevealOutcome::NotApplicable;
    }
    if epoch_block >= threshold_block.saturating_sub(1) {
        entry.set_first_hash(*reveal);
        RevealOutcome::Accepted
    } else {
        RevealOutcome::RejectedTooEarly {
            epoch_block,
            threshold_block,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, deposit: u64) -> StakeEntry {
        StakeEntry {
            address: Address::new(format!("qz_{name}")),
            reveal_hash: Hash32::new([1u8; 32]),
            stake_nonce: 0,
            first_hash: None,
            deposit_balance: deposit,
        }
    }

    fn params() -> ChainParams {
        ChainParams {
            blocks_per_epoch: 100,
            low_staker_reveal_block: 20,
            high_staker_reveal_block: 40,
        }
    }

    #[test]
    fn bottom_half_gets_low_threshold() {
        let next = StakerList::from_entries(vec![
            entry("a", 10),
            entry("b", 20),
            entry("c", 30),
            entry("d", 40),
        ]);
        let p = params();
        assert_eq!(reveal_threshold_block(&next, &Address::new("qz_a"), &p), 20);
        assert_eq!(reveal_threshold_block(&next, &Address::new("qz_b"), &p), 20);
        assert_eq!(reveal_threshold_block(&next, &Address::new("qz_c"), &p), 40);
        assert_eq!(reveal_threshold_block(&next, &Address::new("qz_d"), &p), 40);
    }

    #[test]
    fn threshold_ties_break_by_list_order() {
        // b and c tie on deposit; b appears first so b ranks lower
        let next = StakerList::from_entries(vec![entry("b", 20), entry("c", 20)]);
        let p = params();
        assert_eq!(reveal_threshold_block(&next, &Address::new("qz_b"), &p), 20);
        assert_eq!(reveal_threshold_block(&next, &Address::new("qz_c"), &p), 40);
    }

    #[test]
    fn unlisted_address_gates_low() {
        let next = StakerList::from_entries(vec![entry("a", 10)]);
        let p = params();
        assert_eq!(
            reveal_threshold_block(&next, &Address::new("qz_ghost"), &p),
            20
        );
    }

    #[test]
    fn reveal_gate_tri_state() {
        let reveal = Hash32::new([7u8; 32]);
        let mut e = entry("a", 10);

        // too early: threshold 20 requires epoch block >= 19
        assert_eq!(
            apply_reveal(&mut e, Some(&reveal), 5, 20),
            RevealOutcome::RejectedTooEarly {
                epoch_block: 5,
                threshold_block: 20
            }
        );
        assert!(!e.is_revealed());

        // exactly at threshold - 1
        assert_eq!(apply_reveal(&mut e, Some(&reveal), 19, 20), RevealOutcome::Accepted);
        assert_eq!(e.first_hash, Some(reveal));

        // already revealed
        assert_eq!(
            apply_reveal(&mut e, Some(&Hash32::new([8u8; 32])), 50, 20),
            RevealOutcome::NotApplicable
        );
        assert_eq!(e.first_hash, Some(reveal));
    }

    #[test]
    fn missing_reveal_is_not_applicable() {
        let mut e = entry("a", 10);
        assert_eq!(apply_reveal(&mut e, None, 50, 20), RevealOutcome::NotApplicable);
    }
}
