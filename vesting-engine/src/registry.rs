//! Schedule registry
//!
//! Owns the beneficiary → schedule map and the pending address-change map,
//! and enforces the registration / confirmation / withdrawal / migration /
//! termination rules. Funds move only through the [`LedgerAdapter`] seam.
//!
//! Operations are serialized by the host: each call runs to completion
//! (including ledger calls) before the next is observable. Within a call,
//! every ledger transfer happens before the maps are mutated, so a declined
//! transfer rejects the call with no state change.

use crate::{
    custody::LedgerAdapter,
    schedule::VestingSchedule,
    types::{RegistryEvent, TermField},
    Error, Result,
};
use asset_ledger::{Address, Amount};
use std::collections::HashMap;

/// Vesting schedule registry over a ledger adapter
#[derive(Debug, Clone)]
pub struct ScheduleRegistry<L> {
    /// Administrator identity for gated operations
    admin: Address,

    /// Ledger capability for custody moves
    ledger: L,

    /// One schedule per beneficiary address
    schedules: HashMap<Address, VestingSchedule>,

    /// Pending migration requests, current address → requested address
    change_requests: HashMap<Address, Address>,
}

impl<L: LedgerAdapter> ScheduleRegistry<L> {
    /// Create a registry with the given administrator and ledger capability
    pub fn new(admin: Address, ledger: L) -> Self {
        Self {
            admin,
            ledger,
            schedules: HashMap::new(),
            change_requests: HashMap::new(),
        }
    }

    /// The configured administrator
    pub fn admin(&self) -> &Address {
        &self.admin
    }

    /// Look up the schedule at an address
    pub fn schedule(&self, beneficiary: &Address) -> Option<&VestingSchedule> {
        self.schedules.get(beneficiary)
    }

    /// Look up the pending address-change request for an address
    pub fn pending_address_change(&self, beneficiary: &Address) -> Option<&Address> {
        self.change_requests.get(beneficiary)
    }

    /// Read access to the ledger capability
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable access to the ledger capability
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Register a new unconfirmed schedule for `beneficiary`
    ///
    /// Administrator-only. Overwrites an existing entry only while it is
    /// still unconfirmed; a confirmed entry can never be replaced. Moves no
    /// funds.
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        &mut self,
        caller: &Address,
        beneficiary: &Address,
        depositor: &Address,
        start_time: u64,
        cliff_time: u64,
        end_time: u64,
        total_amount: Amount,
    ) -> Result<RegistryEvent> {
        if caller != &self.admin {
            return Err(Error::Unauthorized);
        }
        if depositor.is_null() {
            return Err(Error::InvalidDepositor);
        }
        if total_amount == 0 {
            return Err(Error::InvalidAmount);
        }
        if let Some(existing) = self.schedules.get(beneficiary) {
            if existing.is_confirmed {
                return Err(Error::AlreadyActive);
            }
        }
        if cliff_time < start_time {
            return Err(Error::InvalidOrdering("cliff precedes start"));
        }
        if end_time < cliff_time {
            return Err(Error::InvalidOrdering("end precedes cliff"));
        }

        self.schedules.insert(
            beneficiary.clone(),
            VestingSchedule {
                start_time,
                cliff_time,
                end_time,
                total_amount,
                total_withdrawn: 0,
                depositor: depositor.clone(),
                is_confirmed: false,
            },
        );

        tracing::info!(
            %beneficiary, %depositor, start_time, cliff_time, end_time, total_amount,
            "schedule registered"
        );

        Ok(RegistryEvent::ScheduleRegistered {
            beneficiary: beneficiary.clone(),
            depositor: depositor.clone(),
            start_time,
            cliff_time,
            end_time,
            total_amount,
        })
    }

    /// Confirm the schedule at the caller's address, pulling funds into custody
    ///
    /// The caller must re-supply exactly the registered terms; any mismatch
    /// names the disagreeing field. One-shot: a confirmed schedule rejects a
    /// second confirmation.
    pub fn confirm(
        &mut self,
        caller: &Address,
        start_time: u64,
        cliff_time: u64,
        end_time: u64,
        total_amount: Amount,
    ) -> Result<RegistryEvent> {
        let entry = self.schedules.get(caller).ok_or(Error::NotRegistered)?;
        if entry.is_confirmed {
            return Err(Error::AlreadyActive);
        }
        if start_time != entry.start_time {
            return Err(Error::TermsMismatch(TermField::Start));
        }
        if cliff_time != entry.cliff_time {
            return Err(Error::TermsMismatch(TermField::Cliff));
        }
        if end_time != entry.end_time {
            return Err(Error::TermsMismatch(TermField::End));
        }
        if total_amount != entry.total_amount {
            return Err(Error::TermsMismatch(TermField::Amount));
        }

        let depositor = entry.depositor.clone();

        // Pull before flipping state; a declined pull leaves the entry
        // unconfirmed and untouched.
        self.ledger.transfer_into(&depositor, total_amount)?;

        let entry = self
            .schedules
            .get_mut(caller)
            .ok_or(Error::NotRegistered)?;
        entry.is_confirmed = true;

        tracing::info!(
            beneficiary = %caller, %depositor, total_amount,
            "schedule confirmed, funds in custody"
        );

        Ok(RegistryEvent::ScheduleConfirmed {
            beneficiary: caller.clone(),
            depositor,
            start_time,
            cliff_time,
            end_time,
            total_amount,
        })
    }

    /// Withdraw everything releasable for the caller at `now`
    ///
    /// Idempotent at a fixed instant: a second call after a full withdrawal
    /// rejects with [`Error::NothingToWithdraw`] and emits nothing.
    pub fn withdraw(&mut self, caller: &Address, now: u64) -> Result<RegistryEvent> {
        let entry = self.schedules.get(caller).ok_or(Error::NotRegistered)?;
        if !entry.is_confirmed {
            return Err(Error::NotConfirmed);
        }

        let releasable = entry.releasable(now);
        if releasable == 0 {
            return Err(Error::NothingToWithdraw);
        }

        self.ledger.transfer_out(caller, releasable)?;

        let entry = self
            .schedules
            .get_mut(caller)
            .ok_or(Error::NotRegistered)?;
        entry.total_withdrawn += releasable;

        tracing::info!(beneficiary = %caller, amount = releasable, "withdrawal");

        Ok(RegistryEvent::Withdrawal {
            beneficiary: caller.clone(),
            amount: releasable,
        })
    }

    /// Request migration of the caller's schedule to `new_address`
    ///
    /// Available as soon as a schedule exists, confirmed or not. Overwrites
    /// any prior pending request for the caller.
    pub fn request_address_change(
        &mut self,
        caller: &Address,
        new_address: &Address,
    ) -> Result<RegistryEvent> {
        if !self.schedules.contains_key(caller) {
            return Err(Error::NotRegistered);
        }

        self.change_requests
            .insert(caller.clone(), new_address.clone());

        tracing::info!(old = %caller, new = %new_address, "address change requested");

        Ok(RegistryEvent::AddressChangeRequested {
            old_address: caller.clone(),
            new_address: new_address.clone(),
        })
    }

    /// Confirm a pending migration, rekeying the schedule verbatim
    ///
    /// Administrator-only. The pending request must name exactly
    /// `new_address`. All fields, including accumulated `total_withdrawn`,
    /// carry over; the old entry and the consumed request are deleted in the
    /// same step.
    pub fn confirm_address_change(
        &mut self,
        caller: &Address,
        old_address: &Address,
        new_address: &Address,
    ) -> Result<()> {
        if caller != &self.admin {
            return Err(Error::Unauthorized);
        }
        match self.change_requests.get(old_address) {
            Some(requested) if requested == new_address => {}
            _ => return Err(Error::NoSuchRequest),
        }
        if !self.schedules.contains_key(old_address) {
            return Err(Error::NotRegistered);
        }
        // Never relocate onto a live schedule; an unconfirmed entry at the
        // target is replaceable, same as re-registration.
        if let Some(occupant) = self.schedules.get(new_address) {
            if occupant.is_confirmed {
                return Err(Error::AlreadyActive);
            }
        }

        let entry = self
            .schedules
            .remove(old_address)
            .ok_or(Error::NotRegistered)?;
        self.schedules.insert(new_address.clone(), entry);
        self.change_requests.remove(old_address);

        tracing::info!(old = %old_address, new = %new_address, "address change confirmed");

        Ok(())
    }

    /// Terminate a schedule early with a fair vested/unvested split
    ///
    /// Administrator-only, destructive, irreversible. The vested-but-unpaid
    /// share goes to the beneficiary, everything else in custody for this
    /// schedule goes to `remainder_recipient`, and the entry is deleted.
    pub fn end_vesting(
        &mut self,
        caller: &Address,
        beneficiary: &Address,
        remainder_recipient: &Address,
        now: u64,
    ) -> Result<RegistryEvent> {
        if caller != &self.admin {
            return Err(Error::Unauthorized);
        }
        let entry = self
            .schedules
            .get(beneficiary)
            .ok_or(Error::NotRegistered)?;

        // An unconfirmed entry never pulled funds: nothing in custody to
        // split, the entry is simply discarded.
        let (beneficiary_share, remainder_share) = if entry.is_confirmed {
            let beneficiary_share = entry.releasable(now);
            let remainder_share =
                entry.total_amount - entry.total_withdrawn - beneficiary_share;
            (beneficiary_share, remainder_share)
        } else {
            (0, 0)
        };

        if beneficiary_share > 0 {
            self.ledger.transfer_out(beneficiary, beneficiary_share)?;
        }
        if remainder_share > 0 {
            self.ledger.transfer_out(remainder_recipient, remainder_share)?;
        }

        self.schedules.remove(beneficiary);

        tracing::info!(
            %beneficiary, %remainder_recipient, beneficiary_share, remainder_share,
            "vesting ended by administrator"
        );

        Ok(RegistryEvent::VestingEndedByOwner {
            beneficiary: beneficiary.clone(),
            beneficiary_share,
            remainder_share,
        })
    }
}
