//! Error types for the Ont Core crate

use ont_io::IoError;
use ont_primitives::PrimitiveError;
use thiserror::Error;

/// Core module errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Binary encoding or decoding failed
    #[error("Serialization error: {0}")]
    Io(#[from] IoError),

    /// A primitive value could not be parsed
    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Transaction type byte is not one this crate understands
    #[error("Unknown transaction type: {0:#04x}")]
    UnknownTransactionType(u8),

    /// Payload kind does not match the transaction type
    #[error("Payload mismatch: {tx_type} transaction cannot carry a {payload} payload")]
    PayloadMismatch {
        /// Transaction type name
        tx_type: &'static str,
        /// Payload kind name
        payload: &'static str,
    },
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
