use byteorder::{ByteOrder, LittleEndian};
use std::mem::size_of;

use crate::{get_var_size, IoError, IoResult};

/// Cursor over a borrowed byte slice.
pub struct MemoryReader<'a> {
    memory: &'a [u8],
    pos: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(memory: &'a [u8]) -> Self {
        Self { memory, pos: 0 }
    }

    #[inline(always)]
    fn ensure_position(&self, move_by: usize, entity: &'static str) -> IoResult<()> {
        if self.remaining() < move_by {
            Err(IoError::UnexpectedEof { entity })
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.pos
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    #[inline(always)]
    pub fn peek(&self) -> IoResult<u8> {
        self.ensure_position(1, "byte")?;
        Ok(self.memory[self.pos])
    }

    pub fn read_bool(&mut self) -> IoResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(IoError::invalid_data("bool", other)),
        }
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> IoResult<u8> {
        self.ensure_position(1, "u8")?;
        let value = self.memory[self.pos];
        self.pos += 1;
        Ok(value)
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> IoResult<u16> {
        let bytes = self.take(size_of::<u16>(), "u16")?;
        Ok(LittleEndian::read_u16(bytes))
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> IoResult<u32> {
        let bytes = self.take(size_of::<u32>(), "u32")?;
        Ok(LittleEndian::read_u32(bytes))
    }

    #[inline(always)]
    pub fn read_u64(&mut self) -> IoResult<u64> {
        let bytes = self.take(size_of::<u64>(), "u64")?;
        Ok(LittleEndian::read_u64(bytes))
    }

    #[inline(always)]
    pub fn read_u128(&mut self) -> IoResult<u128> {
        let bytes = self.take(size_of::<u128>(), "u128")?;
        Ok(LittleEndian::read_u128(bytes))
    }

    #[inline(always)]
    pub fn read_i128(&mut self) -> IoResult<i128> {
        let bytes = self.take(size_of::<i128>(), "i128")?;
        Ok(LittleEndian::read_i128(bytes))
    }

    /// Reads a var-int, rejecting values above `max` and encodings that
    /// are longer than necessary.
    pub fn read_var_int(&mut self, max: u64) -> IoResult<u64> {
        let (len, value) = match self.read_u8()? {
            0xFD => (3, self.read_u16()? as u64),
            0xFE => (5, self.read_u32()? as u64),
            0xFF => (9, self.read_u64()?),
            b => (1, b as u64),
        };
        if len != get_var_size(value) {
            return Err(IoError::invalid_data("var_int", "non-canonical encoding"));
        }
        if value > max {
            return Err(IoError::invalid_data(
                "var_int",
                format!("{value} exceeds maximum {max}"),
            ));
        }
        Ok(value)
    }

    #[inline(always)]
    pub fn read_bytes(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.take(count, "bytes")
    }

    pub fn read_var_bytes(&mut self, max: usize) -> IoResult<&'a [u8]> {
        let length = self.read_var_int(max as u64)? as usize;
        self.take(length, "var_bytes")
    }

    pub fn read_var_string(&mut self, max: usize) -> IoResult<String> {
        let data = self.read_var_bytes(max)?;
        String::from_utf8(data.to_vec()).map_err(|_| IoError::InvalidUtf8)
    }

    /// Reads exactly `N` bytes into a fixed array.
    pub fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N, "array")?);
        Ok(array)
    }

    #[inline(always)]
    pub fn read_to_end(&mut self) -> &'a [u8] {
        let result = &self.memory[self.pos..];
        self.pos = self.memory.len();
        result
    }

    #[inline(always)]
    fn take(&mut self, count: usize, entity: &'static str) -> IoResult<&'a [u8]> {
        self.ensure_position(count, entity)?;
        let result = &self.memory[self.pos..self.pos + count];
        self.pos += count;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryWriter;

    #[test]
    fn test_read_primitives() {
        let mut writer = BinaryWriter::new();
        writer.write_bool(false);
        writer.write_u16(0xBEEF);
        writer.write_u64(u64::MAX - 1);
        writer.write_i128(-42);
        let bytes = writer.into_bytes();

        let mut reader = MemoryReader::new(&bytes);
        assert!(!reader.read_bool().unwrap());
        assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
        assert_eq!(reader.read_u64().unwrap(), u64::MAX - 1);
        assert_eq!(reader.read_i128().unwrap(), -42);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_truncated_input() {
        let mut reader = MemoryReader::new(&[0x01, 0x02]);
        assert_eq!(
            reader.read_u32(),
            Err(IoError::UnexpectedEof { entity: "u32" })
        );
        // A failed read does not advance the cursor.
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_invalid_bool() {
        let mut reader = MemoryReader::new(&[0x02]);
        assert!(matches!(
            reader.read_bool(),
            Err(IoError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_non_canonical_var_int_rejected() {
        // 0x10 encoded in the 3-byte form
        let mut reader = MemoryReader::new(&[0xFD, 0x10, 0x00]);
        assert!(reader.read_var_int(u64::MAX).is_err());
    }

    #[test]
    fn test_var_int_above_max_rejected() {
        let mut reader = MemoryReader::new(&[0x20]);
        assert!(reader.read_var_int(0x10).is_err());
    }

    #[test]
    fn test_var_string_utf8() {
        let mut reader = MemoryReader::new(&[0x02, 0xC3, 0x28]);
        assert_eq!(reader.read_var_string(16), Err(IoError::InvalidUtf8));
    }
}
