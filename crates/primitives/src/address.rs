//! Implementation of `Address`, the 20-byte Ontology account/contract identifier.

use crate::constants::{ADDRESS_VERSION, BASE58_ADDRESS_LENGTH};
use crate::error::{PrimitiveError, PrimitiveResult};
use crate::sha256d;
use ont_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of `Address` values in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// A 20-byte address.
///
/// Bytes are stored in wire order. The hex form reverses them, matching
/// how contract addresses are printed by Ontology tooling, while the
/// base58 form is what accounts are usually shown as.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const LENGTH: usize = ADDRESS_SIZE;

    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_SIZE])
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates an `Address` from a slice of exactly 20 bytes.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` for any other length.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; ADDRESS_SIZE] = value
            .try_into()
            .map_err(|_| PrimitiveError::invalid_format(format!("Invalid length: {}", value.len())))?;
        Ok(Self(bytes))
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Parses the byte-reversed hex form, with or without a `0x` prefix.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != ADDRESS_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "expected {} hex characters, got {}",
                ADDRESS_SIZE * 2,
                s.len()
            )));
        }

        let mut bytes =
            hex::decode(s).map_err(|e| PrimitiveError::invalid_format(e.to_string()))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Byte-reversed hex string with a `0x` prefix.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Encodes the address as base58 with version byte and checksum.
    #[must_use]
    pub fn to_base58(&self) -> String {
        let mut data = Vec::with_capacity(BASE58_ADDRESS_LENGTH);
        data.push(ADDRESS_VERSION);
        data.extend_from_slice(&self.0);

        let checksum = sha256d(&data);
        data.extend_from_slice(&checksum[..4]);

        bs58::encode(data).into_string()
    }

    /// Decodes a base58 address string.
    ///
    /// # Errors
    ///
    /// Fails if the string is not valid base58, has the wrong length or
    /// version byte, or carries a bad checksum.
    pub fn from_base58(address: &str) -> PrimitiveResult<Self> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|e| PrimitiveError::invalid_format(format!("Invalid base58 address: {e}")))?;

        if decoded.len() != BASE58_ADDRESS_LENGTH {
            return Err(PrimitiveError::invalid_format(format!(
                "Invalid address length: expected {}, got {}",
                BASE58_ADDRESS_LENGTH,
                decoded.len()
            )));
        }

        if decoded[0] != ADDRESS_VERSION {
            return Err(PrimitiveError::invalid_format(format!(
                "Invalid address version: expected {}, got {}",
                ADDRESS_VERSION, decoded[0]
            )));
        }

        let checksum = sha256d(&decoded[..21]);
        if decoded[21..] != checksum[..4] {
            return Err(PrimitiveError::InvalidChecksum);
        }

        Self::from_bytes(&decoded[1..21])
    }
}

impl FromStr for Address {
    type Err = PrimitiveError;

    /// Accepts either the hex form (`0x…` or 40 hex digits) or base58.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let looks_hex = s.starts_with("0x")
            || s.starts_with("0X")
            || (s.len() == ADDRESS_SIZE * 2 && s.chars().all(|c| c.is_ascii_hexdigit()));
        if looks_hex {
            Self::parse(s)
        } else {
            Self::from_base58(s)
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(data: [u8; ADDRESS_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serializable for Address {
    fn size(&self) -> usize {
        ADDRESS_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_array::<ADDRESS_SIZE>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_address_base58() {
        let zero = Address::zero();
        assert_eq!(zero.to_base58(), "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM");
        assert_eq!(
            Address::from_base58("AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM").unwrap(),
            zero
        );
    }

    #[test]
    fn test_hex_is_byte_reversed() {
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes[0] = 1;
        let address = Address::new(bytes);
        assert_eq!(
            address.to_hex_string(),
            "0x0000000000000000000000000000000000000001"
        );
        assert_eq!(
            Address::parse("0000000000000000000000000000000000000001").unwrap(),
            address
        );
    }

    #[test]
    fn test_bad_checksum() {
        let mut encoded = bs58::decode(Address::zero().to_base58()).into_vec().unwrap();
        encoded[24] ^= 0xFF;
        let tampered = bs58::encode(encoded).into_string();
        assert_eq!(
            Address::from_base58(&tampered),
            Err(PrimitiveError::InvalidChecksum)
        );
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(Address::parse("0x0102").is_err());
        assert!(Address::from_bytes(&[0u8; 19]).is_err());
    }

    #[test]
    fn test_from_str_accepts_both_forms() {
        let address = Address::new([7u8; ADDRESS_SIZE]);
        assert_eq!(address.to_base58().parse::<Address>().unwrap(), address);
        assert_eq!(address.to_hex_string().parse::<Address>().unwrap(), address);
    }

    #[test]
    fn test_serde_uses_base58() {
        let address = Address::new([3u8; ADDRESS_SIZE]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", address.to_base58()));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    proptest! {
        #[test]
        fn test_base58_roundtrip(bytes in any::<[u8; ADDRESS_SIZE]>()) {
            let address = Address::new(bytes);
            prop_assert_eq!(Address::from_base58(&address.to_base58()).unwrap(), address);
        }

        #[test]
        fn test_hex_roundtrip(bytes in any::<[u8; ADDRESS_SIZE]>()) {
            let address = Address::new(bytes);
            prop_assert_eq!(Address::parse(&address.to_hex_string()).unwrap(), address);
        }
    }
}
