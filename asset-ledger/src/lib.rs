//! In-memory fungible-asset ledger
//!
//! Balance and allowance bookkeeping for a single asset. The vesting engine
//! consumes this crate through a narrow adapter seam and never reaches into
//! the maps directly.
//!
//! # Invariants
//!
//! - Conservation: transfers move units, they never create or destroy them
//!   (only [`TokenLedger::mint`] grows the supply)
//! - No partial effect: a transfer that cannot be covered in full fails
//!   without touching any balance or allowance

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod error;
pub mod ledger;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use ledger::TokenLedger;
pub use types::{Address, Amount};
