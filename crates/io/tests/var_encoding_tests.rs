//! Property tests for var-int and var-bytes framing.

use ont_io::{get_var_size, get_var_size_bytes, BinaryWriter, MemoryReader};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_var_int_roundtrip(value in any::<u64>()) {
        let mut writer = BinaryWriter::new();
        writer.write_var_int(value);
        prop_assert_eq!(writer.len(), get_var_size(value));

        let bytes = writer.into_bytes();
        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_int(u64::MAX).unwrap(), value);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn test_var_bytes_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..600)) {
        let mut writer = BinaryWriter::new();
        writer.write_var_bytes(&data);
        prop_assert_eq!(writer.len(), get_var_size_bytes(&data));

        let bytes = writer.into_bytes();
        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_bytes(data.len()).unwrap(), data.as_slice());
    }

    #[test]
    fn test_var_string_roundtrip(text in ".{0,64}") {
        let mut writer = BinaryWriter::new();
        writer.write_var_string(&text);

        let bytes = writer.into_bytes();
        let mut reader = MemoryReader::new(&bytes);
        prop_assert_eq!(reader.read_var_string(1024).unwrap(), text);
    }
}

#[test]
fn test_var_bytes_respects_max() {
    let mut writer = BinaryWriter::new();
    writer.write_var_bytes(&[0u8; 32]);
    let bytes = writer.into_bytes();

    let mut reader = MemoryReader::new(&bytes);
    assert!(reader.read_var_bytes(31).is_err());
}

#[test]
fn test_var_bytes_truncated_payload() {
    // Declares 4 bytes but carries only 2.
    let mut reader = MemoryReader::new(&[0x04, 0xAA, 0xBB]);
    assert!(reader.read_var_bytes(16).is_err());
}
