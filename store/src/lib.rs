//! Abstract durable state store for the Quartz ledger.
//!
//! Every storage backend implements the [`StateStore`] trait; the rest of
//! the workspace depends only on the trait. The in-memory backend here
//! serves tests and single-process nodes; durable engines live in their
//! own backend crates.

pub mod account;
pub mod error;
pub mod memory;
pub mod state;

pub use account::AccountRecord;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use state::StateStore;
