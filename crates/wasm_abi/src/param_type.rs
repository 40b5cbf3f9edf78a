//! Declared parameter types, as named in contract ABI files.

use std::fmt;
use std::str::FromStr;

use crate::error::EncodingError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    Bool,
    Byte,
    U16,
    U32,
    U64,
    I128,
    U128,
    U256,
    String,
    Bytes,
    Address,
    H256,
    Array(Box<ParamType>),
}

impl ParamType {
    /// Whether values of this type are written with a fixed width.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Self::Bool | Self::Byte => Some(1),
            Self::U16 => Some(2),
            Self::U32 => Some(4),
            Self::U64 => Some(8),
            Self::I128 | Self::U128 => Some(16),
            Self::U256 | Self::H256 => Some(32),
            Self::Address => Some(20),
            Self::String | Self::Bytes | Self::Array(_) => None,
        }
    }
}

impl FromStr for ParamType {
    type Err = EncodingError;

    /// Type names are matched case-insensitively; `Array<T>`, `Vec<T>` and
    /// `List<T>` name homogeneous arrays.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        for prefix in ["array<", "vec<", "list<"] {
            if let Some(rest) = lower.strip_prefix(prefix) {
                let Some(inner) = rest.strip_suffix('>') else {
                    return Err(EncodingError::UnsupportedType(trimmed.to_string()));
                };
                if prefix == "vec<" && inner.trim() == "u8" {
                    return Ok(Self::Bytes);
                }
                return Ok(Self::Array(Box::new(inner.parse()?)));
            }
        }

        match lower.as_str() {
            "bool" | "boolean" => Ok(Self::Bool),
            "u8" | "byte" => Ok(Self::Byte),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" => Ok(Self::U64),
            "i128" | "int" | "integer" => Ok(Self::I128),
            "u128" => Ok(Self::U128),
            "u256" => Ok(Self::U256),
            "string" | "str" | "&str" => Ok(Self::String),
            "bytearray" | "bytes" | "&[u8]" => Ok(Self::Bytes),
            "address" | "&address" => Ok(Self::Address),
            "h256" | "hash" => Ok(Self::H256),
            _ => Err(EncodingError::UnsupportedType(trimmed.to_string())),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("Bool"),
            Self::Byte => f.write_str("U8"),
            Self::U16 => f.write_str("U16"),
            Self::U32 => f.write_str("U32"),
            Self::U64 => f.write_str("U64"),
            Self::I128 => f.write_str("I128"),
            Self::U128 => f.write_str("U128"),
            Self::U256 => f.write_str("U256"),
            Self::String => f.write_str("String"),
            Self::Bytes => f.write_str("ByteArray"),
            Self::Address => f.write_str("Address"),
            Self::H256 => f.write_str("H256"),
            Self::Array(inner) => write!(f, "Array<{inner}>"),
        }
    }
}
