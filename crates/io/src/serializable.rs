//! Serialization trait shared by transaction and payload types.

use crate::{get_var_size, BinaryWriter, IoError, IoResult, MemoryReader};

pub trait Serializable: Sized {
    /// Exact number of bytes `serialize` will produce.
    fn size(&self) -> usize;

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self>;

    /// Serializes into a fresh buffer.
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Deserializes from `data`, rejecting trailing bytes.
    fn from_array(data: &[u8]) -> IoResult<Self> {
        let mut reader = MemoryReader::new(data);
        let value = Self::deserialize(&mut reader)?;
        if !reader.is_empty() {
            return Err(IoError::invalid_data(
                "trailing",
                format!("{} unread bytes", reader.remaining()),
            ));
        }
        Ok(value)
    }
}

/// Encoded size of a length-prefixed array of serializable items.
pub fn get_var_size_slice<T: Serializable>(values: &[T]) -> usize {
    get_var_size(values.len() as u64) + values.iter().map(Serializable::size).sum::<usize>()
}

/// Serializes an array of items with a var-int length prefix.
pub fn serialize_array<T: Serializable>(values: &[T], writer: &mut BinaryWriter) -> IoResult<()> {
    writer.write_var_int(values.len() as u64);
    for value in values {
        value.serialize(writer)?;
    }
    Ok(())
}

/// Deserializes a length-prefixed array, bounded by `max` items.
pub fn deserialize_array<T: Serializable>(
    reader: &mut MemoryReader,
    max: usize,
) -> IoResult<Vec<T>> {
    let count = reader.read_var_int(max as u64)? as usize;
    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
        result.push(T::deserialize(reader)?);
    }
    Ok(result)
}
