use ont_io::{BinaryWriter, MemoryReader};

use crate::error::{EncodingError, EncodingResult};
use crate::param_type::ParamType;
use crate::value::WasmValue;

/// Encodes an argument list back to back, with no outer length prefix.
pub fn encode_args(args: &[WasmValue]) -> EncodingResult<Vec<u8>> {
    let mut writer = BinaryWriter::new();
    for arg in args {
        arg.encode(&mut writer)?;
    }
    Ok(writer.into_bytes())
}

/// Decodes `data` as one value per entry of `types`.
///
/// The whole buffer must be consumed.
pub fn decode_args(data: &[u8], types: &[ParamType]) -> EncodingResult<Vec<WasmValue>> {
    let mut reader = MemoryReader::new(data);
    let mut values = Vec::with_capacity(types.len());
    for ty in types {
        values.push(WasmValue::decode(ty, &mut reader)?);
    }
    if !reader.is_empty() {
        return Err(EncodingError::TrailingBytes(reader.remaining()));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args() {
        assert!(encode_args(&[]).unwrap().is_empty());
        assert!(decode_args(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_trailing_bytes() {
        assert_eq!(
            decode_args(&[1, 0], &[ParamType::Bool]),
            Err(EncodingError::TrailingBytes(1))
        );
    }

    #[test]
    fn test_truncated_arguments() {
        let bytes = encode_args(&[WasmValue::U64(9)]).unwrap();
        assert!(matches!(
            decode_args(&bytes[..4], &[ParamType::U64]),
            Err(EncodingError::Decode(_))
        ));
    }
}
