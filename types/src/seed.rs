//! The epoch-rotating randomness seed.

use crate::hash::Hash32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Combined randomness for one epoch: the bitwise OR of every active
/// staker's revealed first-hash.
///
/// OR over the 32 bytes is identical to OR over the hash interpreted as a
/// 256-bit unsigned integer. The fold is order-independent and idempotent,
/// and it is intentionally biased toward set bits as the staker count grows;
/// that bias is a protocol property, not a defect to correct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochSeed([u8; 32]);

impl EpochSeed {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Fold a revealed first-hash into the seed.
    pub fn merge(&mut self, reveal: &Hash32) {
        for (byte, other) in self.0.iter_mut().zip(reveal.as_bytes()) {
            *byte |= other;
        }
    }
}

impl fmt::Display for EpochSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sets_bits() {
        let mut seed = EpochSeed::ZERO;
        let mut bytes = [0u8; 32];
        bytes[0] = 0b0101;
        seed.merge(&Hash32::new(bytes));
        assert_eq!(seed.as_bytes()[0], 0b0101);

        bytes[0] = 0b1010;
        seed.merge(&Hash32::new(bytes));
        assert_eq!(seed.as_bytes()[0], 0b1111);
    }

    #[test]
    fn merge_is_idempotent() {
        let reveal = Hash32::new([0x3c; 32]);
        let mut seed = EpochSeed::ZERO;
        seed.merge(&reveal);
        let once = seed;
        seed.merge(&reveal);
        assert_eq!(seed, once);
    }
}
