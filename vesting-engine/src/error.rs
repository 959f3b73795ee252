//! Error types for the vesting engine

use crate::types::TermField;
use thiserror::Error;

/// Result type for vesting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Vesting engine errors
///
/// Every failure is a rejection of the whole call: no partial state change,
/// no internal retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caller is not allowed to perform this operation
    #[error("unauthorized caller")]
    Unauthorized,

    /// Depositor address is the null sentinel
    #[error("invalid depositor: null address")]
    InvalidDepositor,

    /// Schedule amount must be positive
    #[error("invalid amount: must be positive")]
    InvalidAmount,

    /// A confirmed schedule already occupies the address
    #[error("schedule already active at this address")]
    AlreadyActive,

    /// Timestamp sequencing violated
    #[error("invalid timestamp ordering: {0}")]
    InvalidOrdering(&'static str),

    /// No schedule registered for the address
    #[error("no schedule registered for this address")]
    NotRegistered,

    /// Schedule exists but has not been confirmed
    #[error("schedule not confirmed")]
    NotConfirmed,

    /// Confirmation term does not match the registered term
    #[error("terms mismatch on {0}")]
    TermsMismatch(TermField),

    /// The ledger declined to move funds
    #[error("transfer failed: {0}")]
    TransferFailed(#[from] crate::custody::TransferError),

    /// Nothing is releasable at the current time
    #[error("nothing to withdraw")]
    NothingToWithdraw,

    /// No matching address-change request
    #[error("no matching address change request")]
    NoSuchRequest,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
