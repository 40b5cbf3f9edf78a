//! Error types for primitive parsing.

use thiserror::Error;

/// Primitive parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Input has the wrong shape (length, prefix, characters)
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Error message describing the format issue
        message: String,
    },

    /// Base58 address checksum did not match
    #[error("Invalid address checksum")]
    InvalidChecksum,
}

impl PrimitiveError {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}

/// Result alias for primitive operations
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
