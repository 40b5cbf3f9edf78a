//! Error types for argument encoding and ABI loading.

use ont_io::IoError;
use thiserror::Error;

/// An argument could not be converted to, or read back from, the Wasm ABI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// ABI type name not recognised
    #[error("unsupported parameter type: {0}")]
    UnsupportedType(String),

    /// Loosely typed value with no Wasm counterpart (null, object, float)
    #[error("unsupported argument value: {0}")]
    UnsupportedValue(String),

    /// Value does not match the declared parameter type
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Declared type
        expected: String,
        /// What was supplied
        found: String,
    },

    /// Value out of range for the declared type
    #[error("{value} does not fit in {target}")]
    Overflow {
        /// Offending value
        value: String,
        /// Target type
        target: &'static str,
    },

    /// Value has the right JSON kind but unparseable content
    #[error("invalid {target} value: {message}")]
    InvalidValue {
        /// Target type
        target: &'static str,
        /// Parser message
        message: String,
    },

    /// Encoded arguments could not be decoded
    #[error("decode failed: {0}")]
    Decode(#[from] IoError),

    /// Bytes left after every declared argument was read
    #[error("{0} trailing bytes after arguments")]
    TrailingBytes(usize),
}

/// Result alias for encoding operations
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Errors raised while loading a contract ABI description.
#[derive(Error, Debug)]
pub enum AbiError {
    #[error("failed to read ABI file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ABI JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot derive a binding name from path: {0}")]
    InvalidPath(String),
}
