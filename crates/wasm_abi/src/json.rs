//! Conversion from JSON arguments into `WasmValue`.

use num_bigint::BigUint;
use num_traits::Num;
use ont_primitives::{Address, H256};
use serde_json::Value;

use crate::error::{EncodingError, EncodingResult};
use crate::param_type::ParamType;
use crate::value::WasmValue;

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &ParamType, found: &Value) -> EncodingError {
    EncodingError::TypeMismatch {
        expected: expected.to_string(),
        found: json_kind(found).to_string(),
    }
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Reads an unsigned integer from a JSON number or decimal string.
fn unsigned<T: TryFrom<u128>>(ty: &ParamType, value: &Value, target: &'static str) -> EncodingResult<T> {
    let wide: u128 = match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => v as u128,
            None => {
                return Err(EncodingError::Overflow {
                    value: n.to_string(),
                    target,
                })
            }
        },
        Value::String(s) => s
            .trim()
            .parse::<u128>()
            .map_err(|e| EncodingError::InvalidValue {
                target,
                message: e.to_string(),
            })?,
        other => return Err(mismatch(ty, other)),
    };
    T::try_from(wide).map_err(|_| EncodingError::Overflow {
        value: wide.to_string(),
        target,
    })
}

impl WasmValue {
    /// Converts an untyped JSON value using its JSON kind alone.
    ///
    /// Strings map to `String`, booleans to `Bool`, integers to `I128` and
    /// arrays to `List`. Null, objects and floats have no Wasm encoding.
    pub fn infer(value: &Value) -> EncodingResult<Self> {
        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(Self::I128(v as i128))
                } else if let Some(v) = n.as_u64() {
                    Ok(Self::I128(v as i128))
                } else {
                    Err(EncodingError::UnsupportedValue(format!("float {n}")))
                }
            }
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::infer)
                .collect::<EncodingResult<Vec<_>>>()
                .map(Self::List),
            Value::Null => Err(EncodingError::UnsupportedValue("null".into())),
            Value::Object(_) => Err(EncodingError::UnsupportedValue("object".into())),
        }
    }

    /// Converts a JSON value to the declared parameter type.
    pub fn from_json(ty: &ParamType, value: &Value) -> EncodingResult<Self> {
        match ty {
            ParamType::Bool => match value {
                Value::Bool(b) => Ok(Self::Bool(*b)),
                other => Err(mismatch(ty, other)),
            },
            ParamType::Byte => unsigned(ty, value, "U8").map(Self::Byte),
            ParamType::U16 => unsigned(ty, value, "U16").map(Self::U16),
            ParamType::U32 => unsigned(ty, value, "U32").map(Self::U32),
            ParamType::U64 => unsigned(ty, value, "U64").map(Self::U64),
            ParamType::U128 => unsigned(ty, value, "U128").map(Self::U128),
            ParamType::I128 => match value {
                Value::Number(n) => n
                    .as_i64()
                    .map(|v| v as i128)
                    .or_else(|| n.as_u64().map(|v| v as i128))
                    .map(Self::I128)
                    .ok_or_else(|| mismatch(ty, value)),
                Value::String(s) => s
                    .trim()
                    .parse::<i128>()
                    .map(Self::I128)
                    .map_err(|e| EncodingError::InvalidValue {
                        target: "I128",
                        message: e.to_string(),
                    }),
                other => Err(mismatch(ty, other)),
            },
            ParamType::U256 => {
                let big = match value {
                    Value::Number(n) => n.as_u64().map(BigUint::from).ok_or_else(|| mismatch(ty, value))?,
                    Value::String(s) => {
                        let s = s.trim();
                        let parsed = if s.starts_with("0x") || s.starts_with("0X") {
                            BigUint::from_str_radix(strip_hex_prefix(s), 16)
                        } else {
                            BigUint::from_str_radix(s, 10)
                        };
                        parsed.map_err(|e| EncodingError::InvalidValue {
                            target: "U256",
                            message: e.to_string(),
                        })?
                    }
                    other => return Err(mismatch(ty, other)),
                };
                if big.bits() > 256 {
                    return Err(EncodingError::Overflow {
                        value: big.to_string(),
                        target: "U256",
                    });
                }
                Ok(Self::U256(big))
            }
            ParamType::String => match value {
                Value::String(s) => Ok(Self::String(s.clone())),
                other => Err(mismatch(ty, other)),
            },
            ParamType::Bytes => match value {
                Value::String(s) => hex::decode(strip_hex_prefix(s.trim()))
                    .map(Self::Bytes)
                    .map_err(|e| EncodingError::InvalidValue {
                        target: "ByteArray",
                        message: e.to_string(),
                    }),
                Value::Array(items) => items
                    .iter()
                    .map(|item| unsigned::<u8>(&ParamType::Byte, item, "U8"))
                    .collect::<EncodingResult<Vec<_>>>()
                    .map(Self::Bytes),
                other => Err(mismatch(ty, other)),
            },
            ParamType::Address => match value {
                Value::String(s) => s
                    .parse::<Address>()
                    .map(Self::Address)
                    .map_err(|e| EncodingError::InvalidValue {
                        target: "Address",
                        message: e.to_string(),
                    }),
                other => Err(mismatch(ty, other)),
            },
            ParamType::H256 => match value {
                Value::String(s) => s
                    .parse::<H256>()
                    .map(Self::H256)
                    .map_err(|e| EncodingError::InvalidValue {
                        target: "H256",
                        message: e.to_string(),
                    }),
                other => Err(mismatch(ty, other)),
            },
            ParamType::Array(inner) => match value {
                Value::Array(items) => items
                    .iter()
                    .map(|item| Self::from_json(inner, item))
                    .collect::<EncodingResult<Vec<_>>>()
                    .map(Self::List),
                other => Err(mismatch(ty, other)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infer_supported() {
        assert_eq!(WasmValue::infer(&json!(true)).unwrap(), WasmValue::Bool(true));
        assert_eq!(WasmValue::infer(&json!(-5)).unwrap(), WasmValue::I128(-5));
        assert_eq!(
            WasmValue::infer(&json!(u64::MAX)).unwrap(),
            WasmValue::I128(u64::MAX as i128)
        );
        assert_eq!(
            WasmValue::infer(&json!(["a", 1])).unwrap(),
            WasmValue::List(vec![WasmValue::String("a".into()), WasmValue::I128(1)])
        );
    }

    #[test]
    fn test_infer_unsupported() {
        for value in [json!(null), json!({"k": 1}), json!(1.5), json!([1, null])] {
            assert!(matches!(
                WasmValue::infer(&value),
                Err(EncodingError::UnsupportedValue(_))
            ));
        }
    }

    #[test]
    fn test_typed_integers() {
        assert_eq!(
            WasmValue::from_json(&ParamType::U128, &json!("340282366920938463463374607431768211455")).unwrap(),
            WasmValue::U128(u128::MAX)
        );
        assert_eq!(
            WasmValue::from_json(&ParamType::I128, &json!("-7")).unwrap(),
            WasmValue::I128(-7)
        );
        assert!(matches!(
            WasmValue::from_json(&ParamType::Byte, &json!(256)),
            Err(EncodingError::Overflow { target: "U8", .. })
        ));
        assert!(matches!(
            WasmValue::from_json(&ParamType::U64, &json!(-1)),
            Err(EncodingError::Overflow { .. })
        ));
    }

    #[test]
    fn test_typed_u256() {
        assert_eq!(
            WasmValue::from_json(&ParamType::U256, &json!("0xff")).unwrap(),
            WasmValue::U256(BigUint::from(255u32))
        );
        let too_big = format!("0x1{}", "0".repeat(64));
        assert!(WasmValue::from_json(&ParamType::U256, &json!(too_big)).is_err());
    }

    #[test]
    fn test_typed_bytes_and_address() {
        assert_eq!(
            WasmValue::from_json(&ParamType::Bytes, &json!("0x4d5a")).unwrap(),
            WasmValue::Bytes(vec![0x4D, 0x5A])
        );
        assert_eq!(
            WasmValue::from_json(&ParamType::Bytes, &json!([1, 2])).unwrap(),
            WasmValue::Bytes(vec![1, 2])
        );
        assert_eq!(
            WasmValue::from_json(&ParamType::Address, &json!("AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM")).unwrap(),
            WasmValue::Address(Address::zero())
        );
        assert!(WasmValue::from_json(&ParamType::Address, &json!("not-an-address")).is_err());
    }

    #[test]
    fn test_type_mismatch() {
        assert_eq!(
            WasmValue::from_json(&ParamType::String, &json!(1)),
            Err(EncodingError::TypeMismatch {
                expected: "String".into(),
                found: "integer".into(),
            })
        );
        assert!(WasmValue::from_json(&ParamType::Bool, &json!("true")).is_err());
    }

    #[test]
    fn test_typed_array() {
        let ty = ParamType::Array(Box::new(ParamType::U32));
        assert_eq!(
            WasmValue::from_json(&ty, &json!([1, 2])).unwrap(),
            WasmValue::List(vec![WasmValue::U32(1), WasmValue::U32(2)])
        );
    }
}
