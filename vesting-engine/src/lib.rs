//! Vesting-Settlement Engine
//!
//! Per-beneficiary linear release schedules settled against an external
//! fungible-asset ledger.
//!
//! # Protocol
//!
//! 1. **Registration**: the administrator records the terms for a beneficiary
//! 2. **Confirmation**: the beneficiary re-supplies the exact terms; funds are
//!    pulled from the depositor into custody only then
//! 3. **Withdrawal**: time-proportional release after the cliff, floor
//!    division, remainder retained until the end time
//! 4. **Migration**: beneficiary requests a new address, administrator
//!    confirms; progress carries over verbatim
//! 5. **Termination**: administrator ends a schedule early with a fair
//!    vested/unvested split
//!
//! # Invariants
//!
//! - Conservation: units paid out never exceed units pulled into custody
//! - `total_withdrawn` is monotone and never exceeds `total_amount`
//! - A confirmed schedule can never be overwritten or re-confirmed
//! - Every operation applies atomically or rejects with no state change

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod config;
pub mod custody;
pub mod error;
pub mod registry;
pub mod schedule;
pub mod types;

// Re-exports
pub use asset_ledger::{Address, Amount};
pub use config::Config;
pub use custody::{CustodyLedger, LedgerAdapter, TransferError};
pub use error::{Error, Result};
pub use registry::ScheduleRegistry;
pub use schedule::VestingSchedule;
pub use types::{RegistryEvent, TermField};
