//! Ledger address type with `qz_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Quartz ledger address, always prefixed with `qz_`.
///
/// Derived from the account's extended public key by the wallet collaborator;
/// this crate only carries the encoded form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// The standard prefix for all Quartz addresses.
    pub const PREFIX: &'static str = "qz_";

    /// Create a new address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `qz_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with qz_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address() {
        let addr = Address::new("qz_alice");
        assert!(addr.is_valid());
        assert_eq!(addr.as_str(), "qz_alice");
    }

    #[test]
    #[should_panic(expected = "must start with qz_")]
    fn rejects_missing_prefix() {
        Address::new("alice");
    }

    #[test]
    fn bare_prefix_is_invalid() {
        let addr = Address::new("qz_");
        assert!(!addr.is_valid());
    }
}
