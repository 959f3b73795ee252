//! Configuration for the vesting engine

use asset_ledger::Address;
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Administrator identity for gated operations
    pub administrator: Address,

    /// Account holding custody between confirmation and payout
    pub custody_account: Address,

    /// Service name
    pub service_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            administrator: Address::new("admin"),
            custody_account: Address::new("vesting-custody"),
            service_name: "vesting-engine".to_string(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("failed to parse config: {}", e)))?;
        if config.administrator.is_null() {
            return Err(crate::Error::Config(
                "administrator must not be null".to_string(),
            ));
        }
        if config.custody_account.is_null() {
            return Err(crate::Error::Config(
                "custody account must not be null".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(admin) = std::env::var("VESTING_ADMIN") {
            config.administrator = Address::new(admin);
        }

        if let Ok(custody) = std::env::var("VESTING_CUSTODY_ACCOUNT") {
            config.custody_account = Address::new(custody);
        }

        Ok(config)
    }
}
