//! Error types for the Ont Contract crate

use ont_core::CoreError;
use ont_io::IoError;
use ont_wasm_abi::EncodingError;
use thiserror::Error;

/// Contract builder errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Contract code was not valid hex
    #[error("Decode error: {0}")]
    Decode(String),

    /// An argument has no Wasm encoding or does not fit its declared type
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Method missing from the ABI, or called with the wrong arity
    #[error("ABI error: {0}")]
    Abi(String),

    /// Client configuration lacks a required value
    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<hex::FromHexError> for ContractError {
    fn from(err: hex::FromHexError) -> Self {
        ContractError::Decode(err.to_string())
    }
}

impl From<IoError> for ContractError {
    fn from(err: IoError) -> Self {
        ContractError::Core(CoreError::Io(err))
    }
}

/// Result type for contract operations
pub type ContractResult<T> = Result<T, ContractError>;
