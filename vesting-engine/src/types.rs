//! Event and term types for the vesting engine

use asset_ledger::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schedule term named by a confirmation mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermField {
    /// Start timestamp
    Start,
    /// Cliff timestamp
    Cliff,
    /// End timestamp
    End,
    /// Total amount
    Amount,
}

impl fmt::Display for TermField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermField::Start => "start",
            TermField::Cliff => "cliff",
            TermField::End => "end",
            TermField::Amount => "amount",
        };
        write!(f, "{}", name)
    }
}

/// Event emitted by a successful registry operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A schedule was registered (unconfirmed, no funds moved)
    ScheduleRegistered {
        /// Address entitled to the release
        beneficiary: Address,
        /// Address that will fund the schedule
        depositor: Address,
        /// Start timestamp
        start_time: u64,
        /// Cliff timestamp
        cliff_time: u64,
        /// End timestamp
        end_time: u64,
        /// Total units to release
        total_amount: Amount,
    },

    /// The beneficiary accepted the terms and funds entered custody
    ScheduleConfirmed {
        /// Address entitled to the release
        beneficiary: Address,
        /// Address the funds were pulled from
        depositor: Address,
        /// Start timestamp
        start_time: u64,
        /// Cliff timestamp
        cliff_time: u64,
        /// End timestamp
        end_time: u64,
        /// Total units to release
        total_amount: Amount,
    },

    /// Vested units were paid out
    Withdrawal {
        /// Receiving beneficiary
        beneficiary: Address,
        /// Exact units moved
        amount: Amount,
    },

    /// The beneficiary asked to move the schedule to a new address
    AddressChangeRequested {
        /// Current beneficiary address
        old_address: Address,
        /// Requested replacement address
        new_address: Address,
    },

    /// The administrator terminated the schedule early
    VestingEndedByOwner {
        /// Beneficiary whose schedule ended
        beneficiary: Address,
        /// Vested units paid to the beneficiary
        beneficiary_share: Amount,
        /// Unvested units paid to the remainder recipient
        remainder_share: Amount,
    },
}
