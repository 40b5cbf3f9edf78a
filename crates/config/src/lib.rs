//! Ont Configuration Module
//!
//! Client settings for building Ontology Wasm contract transactions, read
//! from a TOML file:
//!
//! ```toml
//! [transaction]
//! gas_price = 2500
//! gas_limit = 20000
//! contract_version = 0
//!
//! [account]
//! address = "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM"
//! label = "deployer"
//!
//! [contract]
//! address = "0x0000000000000000000000000000000000000001"
//!
//! [logger]
//! level = "info"
//! ```
//!
//! Every section and field is optional.

use std::fs;
use std::path::Path;

use ont_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Gas price used when none is configured.
pub const DEFAULT_GAS_PRICE: u64 = 2500;

/// Gas limit used when none is configured.
pub const DEFAULT_GAS_LIMIT: u64 = 20000;

/// Version byte written into invoke parameters.
pub const DEFAULT_CONTRACT_VERSION: u8 = 0;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Gas and versioning applied to every built transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionConfig {
    pub gas_price: u64,
    pub gas_limit: u64,
    pub contract_version: u8,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            gas_price: DEFAULT_GAS_PRICE,
            gas_limit: DEFAULT_GAS_LIMIT,
            contract_version: DEFAULT_CONTRACT_VERSION,
        }
    }
}

/// The paying account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub address: Option<Address>,
    pub label: Option<String>,
}

/// The contract being invoked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub transaction: TransactionConfig,
    pub account: AccountConfig,
    pub contract: ContractConfig,
    pub logger: LoggerConfig,
}

impl ClientConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(target: "ont_config", path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the config as TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_toml_string()?).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.transaction.gas_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "transaction.gas_limit",
                message: "must be greater than zero".into(),
            });
        }
        if self.logger.level.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "logger.level",
                message: "cannot be empty".into(),
            });
        }
        Ok(())
    }
}
