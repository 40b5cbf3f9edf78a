//! Argument values and their binary form.

use std::fmt;

use num_bigint::BigUint;
use ont_io::{BinaryWriter, MemoryReader, Serializable};
use ont_primitives::{Address, H256};

use crate::error::{EncodingError, EncodingResult};
use crate::param_type::ParamType;

/// Width of an encoded `U256`.
pub const U256_SIZE: usize = 32;

/// One invocation argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WasmValue {
    Bool(bool),
    Byte(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I128(i128),
    U128(u128),
    U256(BigUint),
    String(String),
    Bytes(Vec<u8>),
    Address(Address),
    H256(H256),
    List(Vec<WasmValue>),
}

impl WasmValue {
    /// The declared type that decodes this value back.
    ///
    /// Lists report `Array<T>` only when non-empty and homogeneous.
    pub fn param_type(&self) -> Option<ParamType> {
        Some(match self {
            Self::Bool(_) => ParamType::Bool,
            Self::Byte(_) => ParamType::Byte,
            Self::U16(_) => ParamType::U16,
            Self::U32(_) => ParamType::U32,
            Self::U64(_) => ParamType::U64,
            Self::I128(_) => ParamType::I128,
            Self::U128(_) => ParamType::U128,
            Self::U256(_) => ParamType::U256,
            Self::String(_) => ParamType::String,
            Self::Bytes(_) => ParamType::Bytes,
            Self::Address(_) => ParamType::Address,
            Self::H256(_) => ParamType::H256,
            Self::List(items) => {
                let (first, rest) = items.split_first()?;
                let inner = first.param_type()?;
                for item in rest {
                    if item.param_type().as_ref() != Some(&inner) {
                        return None;
                    }
                }
                ParamType::Array(Box::new(inner))
            }
        })
    }

    pub(crate) fn encode(&self, writer: &mut BinaryWriter) -> EncodingResult<()> {
        match self {
            Self::Bool(value) => writer.write_bool(*value),
            Self::Byte(value) => writer.write_u8(*value),
            Self::U16(value) => writer.write_u16(*value),
            Self::U32(value) => writer.write_u32(*value),
            Self::U64(value) => writer.write_u64(*value),
            Self::I128(value) => writer.write_i128(*value),
            Self::U128(value) => writer.write_u128(*value),
            Self::U256(value) => {
                let mut bytes = value.to_bytes_le();
                if bytes.len() > U256_SIZE {
                    return Err(EncodingError::Overflow {
                        value: value.to_string(),
                        target: "U256",
                    });
                }
                bytes.resize(U256_SIZE, 0);
                writer.write_bytes(&bytes);
            }
            Self::String(value) => writer.write_var_string(value),
            Self::Bytes(value) => writer.write_var_bytes(value),
            Self::Address(value) => writer.write_bytes(value.as_bytes()),
            Self::H256(value) => writer.write_bytes(value.as_bytes()),
            Self::List(items) => {
                writer.write_var_int(items.len() as u64);
                for item in items {
                    item.encode(writer)?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn decode(ty: &ParamType, reader: &mut MemoryReader) -> EncodingResult<Self> {
        // Every length prefix is bounded by what is left in the buffer.
        let max = reader.remaining();
        Ok(match ty {
            ParamType::Bool => Self::Bool(reader.read_bool()?),
            ParamType::Byte => Self::Byte(reader.read_u8()?),
            ParamType::U16 => Self::U16(reader.read_u16()?),
            ParamType::U32 => Self::U32(reader.read_u32()?),
            ParamType::U64 => Self::U64(reader.read_u64()?),
            ParamType::I128 => Self::I128(reader.read_i128()?),
            ParamType::U128 => Self::U128(reader.read_u128()?),
            ParamType::U256 => Self::U256(BigUint::from_bytes_le(reader.read_bytes(U256_SIZE)?)),
            ParamType::String => Self::String(reader.read_var_string(max)?),
            ParamType::Bytes => Self::Bytes(reader.read_var_bytes(max)?.to_vec()),
            ParamType::Address => Self::Address(Address::deserialize(reader)?),
            ParamType::H256 => Self::H256(H256::deserialize(reader)?),
            ParamType::Array(inner) => {
                let count = reader.read_var_int(max as u64)? as usize;
                let mut items = Vec::with_capacity(count);
                for _ in 0..count {
                    items.push(Self::decode(inner, reader)?);
                }
                Self::List(items)
            }
        })
    }
}

impl fmt::Display for WasmValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Byte(value) => write!(f, "{value}"),
            Self::U16(value) => write!(f, "{value}"),
            Self::U32(value) => write!(f, "{value}"),
            Self::U64(value) => write!(f, "{value}"),
            Self::I128(value) => write!(f, "{value}"),
            Self::U128(value) => write!(f, "{value}"),
            Self::U256(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::Bytes(value) => write!(f, "0x{}", hex::encode(value)),
            Self::Address(value) => write!(f, "{value}"),
            Self::H256(value) => write!(f, "{value}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for WasmValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u8> for WasmValue {
    fn from(value: u8) -> Self {
        Self::Byte(value)
    }
}

impl From<u16> for WasmValue {
    fn from(value: u16) -> Self {
        Self::U16(value)
    }
}

impl From<u32> for WasmValue {
    fn from(value: u32) -> Self {
        Self::U32(value)
    }
}

impl From<u64> for WasmValue {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

impl From<i64> for WasmValue {
    fn from(value: i64) -> Self {
        Self::I128(value as i128)
    }
}

impl From<i128> for WasmValue {
    fn from(value: i128) -> Self {
        Self::I128(value)
    }
}

impl From<u128> for WasmValue {
    fn from(value: u128) -> Self {
        Self::U128(value)
    }
}

impl From<BigUint> for WasmValue {
    fn from(value: BigUint) -> Self {
        Self::U256(value)
    }
}

impl From<&str> for WasmValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for WasmValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for WasmValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Address> for WasmValue {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

impl From<H256> for WasmValue {
    fn from(value: H256) -> Self {
        Self::H256(value)
    }
}

impl From<Vec<WasmValue>> for WasmValue {
    fn from(value: Vec<WasmValue>) -> Self {
        Self::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(value: &WasmValue) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        value.encode(&mut writer).unwrap();
        writer.into_bytes()
    }

    #[test]
    fn test_fixed_width_layouts() {
        assert_eq!(encoded(&WasmValue::Bool(true)), vec![1]);
        assert_eq!(encoded(&WasmValue::Byte(0xAB)), vec![0xAB]);
        assert_eq!(encoded(&WasmValue::U16(0x0102)), vec![0x02, 0x01]);
        assert_eq!(encoded(&WasmValue::U128(1)).len(), 16);
        assert_eq!(encoded(&WasmValue::I128(-2))[0], 0xFE);
        assert_eq!(encoded(&WasmValue::Address(Address::zero())), vec![0; 20]);
    }

    #[test]
    fn test_u256_padding_and_overflow() {
        let bytes = encoded(&WasmValue::U256(BigUint::from(258u32)));
        assert_eq!(bytes.len(), U256_SIZE);
        assert_eq!(&bytes[..3], &[0x02, 0x01, 0x00]);

        let too_big = BigUint::from(1u8) << 256;
        let mut writer = BinaryWriter::new();
        assert!(matches!(
            WasmValue::U256(too_big).encode(&mut writer),
            Err(EncodingError::Overflow { target: "U256", .. })
        ));
    }

    #[test]
    fn test_list_is_count_prefixed() {
        let list = WasmValue::List(vec![WasmValue::Byte(1), WasmValue::String("ab".into())]);
        assert_eq!(encoded(&list), vec![0x02, 0x01, 0x02, b'a', b'b']);
    }

    #[test]
    fn test_param_type_for_lists() {
        let homogeneous = WasmValue::List(vec![WasmValue::U32(1), WasmValue::U32(2)]);
        assert_eq!(
            homogeneous.param_type(),
            Some(ParamType::Array(Box::new(ParamType::U32)))
        );

        let mixed = WasmValue::List(vec![WasmValue::U32(1), WasmValue::Bool(true)]);
        assert_eq!(mixed.param_type(), None);
        assert_eq!(WasmValue::List(Vec::new()).param_type(), None);
    }

    #[test]
    fn test_display() {
        let value = WasmValue::List(vec![WasmValue::Bytes(vec![0xAB]), WasmValue::String("x".into())]);
        assert_eq!(value.to_string(), "[0xab, \"x\"]");
    }
}
