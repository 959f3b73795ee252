//! Vesting schedule record and release math

use asset_ledger::{Address, Amount};
use serde::{Deserialize, Serialize};

/// Per-beneficiary linear release schedule
///
/// Created unconfirmed by registration; inert (no funds in custody, no
/// withdrawals) until the beneficiary confirms the exact terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingSchedule {
    /// Release begins accruing here
    pub start_time: u64,

    /// No release before this timestamp, regardless of accrual
    pub cliff_time: u64,

    /// Release fully accrued at this timestamp
    pub end_time: u64,

    /// Total units released over the schedule
    pub total_amount: Amount,

    /// Cumulative units already paid out (monotone)
    pub total_withdrawn: Amount,

    /// Address the funds are pulled from at confirmation
    pub depositor: Address,

    /// Whether the beneficiary has accepted the terms
    pub is_confirmed: bool,
}

impl VestingSchedule {
    /// Cumulative entitlement at `now`, irrespective of prior payouts
    ///
    /// Zero before the cliff. Otherwise proportional to elapsed time with
    /// floor division; the fractional remainder stays in custody until `end`,
    /// at which point the full amount is vested exactly.
    pub fn vested_amount(&self, now: u64) -> Amount {
        if now < self.cliff_time {
            return 0;
        }

        let span = self.end_time - self.start_time;
        if span == 0 {
            // Degenerate instant schedule: fully vested once past the cliff
            return self.total_amount;
        }

        let elapsed = now.saturating_sub(self.start_time).min(span);

        // floor(total * elapsed / span) without overflowing u128:
        // split total into span-sized quotient and remainder.
        let quotient = self.total_amount / span as u128;
        let remainder = self.total_amount % span as u128;
        quotient * elapsed as u128 + remainder * elapsed as u128 / span as u128
    }

    /// Units withdrawable at `now`: vested minus already withdrawn
    pub fn releasable(&self, now: u64) -> Amount {
        self.vested_amount(now).saturating_sub(self.total_withdrawn)
    }
}
