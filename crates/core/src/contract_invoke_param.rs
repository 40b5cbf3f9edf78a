//! The envelope a Wasm contract invocation is wrapped in.
//!
//! ```text
//! version:u8 | address:[20] | method:var_bytes | args:var_bytes
//! ```

use ont_io::{get_var_size_bytes, BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use ont_primitives::{Address, ADDRESS_SIZE};

use crate::transaction::MAX_TX_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInvokeParam {
    pub version: u8,
    pub address: Address,
    pub method: String,
    /// Arguments already encoded with the Wasm argument ABI.
    pub args: Vec<u8>,
}

impl Serializable for ContractInvokeParam {
    fn size(&self) -> usize {
        1 + ADDRESS_SIZE + get_var_size_bytes(self.method.as_bytes()) + get_var_size_bytes(&self.args)
    }

    /// The envelope travels inside an invoke transaction, so it shares
    /// the transaction size limit.
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        let size = self.size();
        if size > MAX_TX_SIZE {
            return Err(IoError::format(format!(
                "invoke param size {size} exceeds maximum {MAX_TX_SIZE}"
            )));
        }
        writer.write_u8(self.version);
        self.address.serialize(writer)?;
        writer.write_var_string(&self.method);
        writer.write_var_bytes(&self.args);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let start = reader.position();
        let param = Self {
            version: reader.read_u8()?,
            address: Address::deserialize(reader)?,
            method: reader.read_var_string(MAX_TX_SIZE)?,
            args: reader.read_var_bytes(MAX_TX_SIZE)?.to_vec(),
        };
        let size = reader.position() - start;
        if size > MAX_TX_SIZE {
            return Err(IoError::format(format!(
                "invoke param size {size} exceeds maximum {MAX_TX_SIZE}"
            )));
        }
        Ok(param)
    }
}
