//! Balance and allowance bookkeeping
//!
//! Every mutating call either applies in full or returns an error with no
//! state touched; the debit-side check always runs before any write.

use crate::{
    types::{Address, Amount},
    Error, Result,
};
use std::collections::HashMap;

/// Single-asset ledger with pull-payment allowances
#[derive(Debug, Clone, Default)]
pub struct TokenLedger {
    /// Balance per account
    balances: HashMap<Address, Amount>,

    /// Authorized pull amount per (owner, spender)
    allowances: HashMap<(Address, Address), Amount>,
}

impl TokenLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance of an account (zero if unknown)
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Remaining pull authorization from `owner` to `spender`
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(owner.clone(), spender.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Credit freshly issued units to an account
    pub fn mint(&mut self, to: &Address, amount: Amount) -> Result<()> {
        if to.is_null() {
            return Err(Error::NullAddress);
        }
        let balance = self.balances.entry(to.clone()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| Error::BalanceOverflow(to.clone()))?;
        tracing::debug!(account = %to, amount, "minted");
        Ok(())
    }

    /// Authorize `spender` to pull up to `amount` from the caller `owner`
    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount) -> Result<()> {
        if owner.is_null() || spender.is_null() {
            return Err(Error::NullAddress);
        }
        self.allowances
            .insert((owner.clone(), spender.clone()), amount);
        Ok(())
    }

    /// Move units between accounts
    pub fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<()> {
        if from.is_null() || to.is_null() {
            return Err(Error::NullAddress);
        }
        self.debit(from, amount)?;
        self.credit(to, amount)
    }

    /// Pull units from `from` to `to` on behalf of `spender`
    ///
    /// Checks the allowance before any balance moves; the allowance is
    /// decremented only on success.
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<()> {
        if spender.is_null() || from.is_null() || to.is_null() {
            return Err(Error::NullAddress);
        }

        let available = self.allowance(from, spender);
        if available < amount {
            return Err(Error::InsufficientAllowance {
                owner: from.clone(),
                spender: spender.clone(),
                required: amount,
                available,
            });
        }

        self.debit(from, amount)?;
        self.credit(to, amount)?;
        self.allowances
            .insert((from.clone(), spender.clone()), available - amount);
        Ok(())
    }

    fn debit(&mut self, account: &Address, amount: Amount) -> Result<()> {
        let available = self.balance_of(account);
        if available < amount {
            return Err(Error::InsufficientBalance {
                account: account.clone(),
                required: amount,
                available,
            });
        }
        self.balances.insert(account.clone(), available - amount);
        Ok(())
    }

    fn credit(&mut self, account: &Address, amount: Amount) -> Result<()> {
        let balance = self.balances.entry(account.clone()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| Error::BalanceOverflow(account.clone()))?;
        Ok(())
    }

    /// Total units in circulation
    pub fn total_supply(&self) -> Amount {
        self.balances.values().sum()
    }
}
