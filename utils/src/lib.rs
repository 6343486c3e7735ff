//! Shared utilities for the Quartz ledger.

pub mod logging;

pub use logging::{init_test_tracing, init_tracing};
