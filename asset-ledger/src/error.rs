//! Error types for the asset ledger

use crate::types::Address;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Account balance does not cover the transfer
    #[error("insufficient balance for {account}: required {required}, available {available}")]
    InsufficientBalance {
        /// Account being debited
        account: Address,
        /// Units the transfer needs
        required: u128,
        /// Units the account holds
        available: u128,
    },

    /// Spender allowance does not cover the pull
    #[error("insufficient allowance for {spender} on {owner}: required {required}, available {available}")]
    InsufficientAllowance {
        /// Account whose funds are being pulled
        owner: Address,
        /// Account doing the pulling
        spender: Address,
        /// Units the pull needs
        required: u128,
        /// Units currently authorized
        available: u128,
    },

    /// Minting or crediting would overflow the balance
    #[error("balance overflow for {0}")]
    BalanceOverflow(Address),

    /// Null address used where a real account is required
    #[error("null address")]
    NullAddress,
}
