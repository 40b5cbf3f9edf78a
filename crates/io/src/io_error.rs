use thiserror::Error;

/// Errors raised while reading or writing binary payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    #[error("Unexpected end of input while reading {entity}")]
    UnexpectedEof { entity: &'static str },

    #[error("Invalid data in {context}: {value}")]
    InvalidData { context: String, value: String },

    #[error("Invalid UTF-8 sequence")]
    InvalidUtf8,

    #[error("Format error: {0}")]
    Format(String),
}

impl IoError {
    pub fn invalid_data(context: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidData {
            context: context.into(),
            value: value.to_string(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

pub type IoResult<T> = Result<T, IoError>;
