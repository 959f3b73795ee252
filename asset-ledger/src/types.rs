//! Core types for the asset ledger

use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset amount in base units (no fractional representation)
pub type Amount = u128;

/// Account identifier
///
/// Opaque to the ledger; the empty string is the null sentinel and never owns
/// a balance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Create new address
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The null sentinel
    pub fn null() -> Self {
        Self(String::new())
    }

    /// Whether this is the null sentinel
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "<null>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
