//! 32-byte hash type.

use crate::error::{PrimitiveError, PrimitiveResult};
use ont_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const H256_SIZE: usize = 32;

/// A 32-byte hash stored in wire order and displayed byte-reversed.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct H256([u8; H256_SIZE]);

impl H256 {
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; H256_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; H256_SIZE])
    }

    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; H256_SIZE] = value
            .try_into()
            .map_err(|_| PrimitiveError::invalid_format(format!("Invalid length: {}", value.len())))?;
        Ok(Self(bytes))
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; H256_SIZE] {
        &self.0
    }

    /// Parses the byte-reversed hex form, with or without a `0x` prefix.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if s.len() != H256_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "expected {} hex characters, got {}",
                H256_SIZE * 2,
                s.len()
            )));
        }
        let mut bytes =
            hex::decode(s).map_err(|e| PrimitiveError::invalid_format(e.to_string()))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Byte-reversed hex string without prefix, as transaction hashes are shown.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }
}

impl FromStr for H256 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim())
    }
}

impl fmt::Display for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H256({})", self.to_hex_string())
    }
}

impl From<[u8; H256_SIZE]> for H256 {
    fn from(data: [u8; H256_SIZE]) -> Self {
        Self(data)
    }
}

impl AsRef<[u8]> for H256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for H256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for H256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serializable for H256 {
    fn size(&self) -> usize {
        H256_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_array::<H256_SIZE>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reverses_bytes() {
        let mut bytes = [0u8; H256_SIZE];
        bytes[0] = 0xAB;
        let hash = H256::new(bytes);
        let shown = hash.to_string();
        assert!(shown.ends_with("ab"));
        assert_eq!(shown.parse::<H256>().unwrap(), hash);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert!(H256::parse("abcd").is_err());
    }

    #[test]
    fn test_serializable_roundtrip() {
        let hash = H256::new([9u8; H256_SIZE]);
        let bytes = hash.to_array().unwrap();
        assert_eq!(bytes.len(), H256_SIZE);
        assert_eq!(H256::from_array(&bytes).unwrap(), hash);
    }
}
