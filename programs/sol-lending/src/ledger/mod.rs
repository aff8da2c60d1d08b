//! Host-side lending ledger.
//!
//! Runs the same state transitions as the on-chain instructions over an
//! in-process account store, with Solana-style per-account write locks so
//! that transactions touching the same account never interleave.

pub mod clock;
pub mod config;
pub mod engine;
pub mod locks;
pub mod store;

pub use clock::*;
pub use config::*;
pub use engine::*;
pub use locks::*;
pub use store::*;
