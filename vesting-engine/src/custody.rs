//! Ledger adapter seam
//!
//! The registry never owns asset accounting; it moves funds through this
//! narrow capability and trusts the result. A declined transfer must leave
//! the underlying ledger untouched.

use asset_ledger::{Address, Amount, TokenLedger};
use thiserror::Error;

/// A declined ledger transfer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransferError(pub String);

/// Capability for moving funds in and out of engine custody
pub trait LedgerAdapter {
    /// Pull `amount` from `from` into custody
    ///
    /// Must fail without partial effect if `from` lacks balance or has not
    /// authorized the pull.
    fn transfer_into(&mut self, from: &Address, amount: Amount) -> Result<(), TransferError>;

    /// Pay `amount` out of custody to `to`
    fn transfer_out(&mut self, to: &Address, amount: Amount) -> Result<(), TransferError>;
}

/// Adapter binding an in-memory [`TokenLedger`] to a custody account
///
/// Pulls are allowance-gated `transfer_from` calls with the custody account
/// as spender; payouts are plain transfers from the custody account.
#[derive(Debug, Clone)]
pub struct CustodyLedger {
    ledger: TokenLedger,
    custodian: Address,
}

impl CustodyLedger {
    /// Wrap a ledger with the given custody account
    pub fn new(ledger: TokenLedger, custodian: Address) -> Self {
        Self { ledger, custodian }
    }

    /// The custody account
    pub fn custodian(&self) -> &Address {
        &self.custodian
    }

    /// Read access to the underlying ledger
    pub fn ledger(&self) -> &TokenLedger {
        &self.ledger
    }

    /// Mutable access to the underlying ledger (minting, approvals)
    pub fn ledger_mut(&mut self) -> &mut TokenLedger {
        &mut self.ledger
    }
}

impl LedgerAdapter for CustodyLedger {
    fn transfer_into(&mut self, from: &Address, amount: Amount) -> Result<(), TransferError> {
        self.ledger
            .transfer_from(&self.custodian, from, &self.custodian, amount)
            .map_err(|e| TransferError(e.to_string()))
    }

    fn transfer_out(&mut self, to: &Address, amount: Amount) -> Result<(), TransferError> {
        self.ledger
            .transfer(&self.custodian, to, amount)
            .map_err(|e| TransferError(e.to_string()))
    }
}
