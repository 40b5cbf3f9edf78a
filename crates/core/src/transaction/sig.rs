use ont_io::{get_var_size_bytes, BinaryWriter, IoResult, MemoryReader, Serializable};

use super::core::MAX_TX_SIZE;

/// A signature entry as produced by an external signer: the invocation
/// script (signature data) and the verification script (public keys).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sig {
    pub invocation_script: Vec<u8>,
    pub verification_script: Vec<u8>,
}

impl Serializable for Sig {
    fn size(&self) -> usize {
        get_var_size_bytes(&self.invocation_script) + get_var_size_bytes(&self.verification_script)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invocation_script);
        writer.write_var_bytes(&self.verification_script);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            invocation_script: reader.read_var_bytes(MAX_TX_SIZE)?.to_vec(),
            verification_script: reader.read_var_bytes(MAX_TX_SIZE)?.to_vec(),
        })
    }
}
