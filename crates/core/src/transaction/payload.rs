use ont_io::{get_var_size_bytes, get_var_size_str, BinaryWriter, IoResult, MemoryReader};

use super::core::MAX_TX_SIZE;

/// Contract deployment payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeployCode {
    /// Raw contract binary.
    pub code: Vec<u8>,
    /// Storage flag. Current nodes read this byte as the VM type
    /// (`3` selects the Wasm VM).
    pub need_storage: u8,
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

impl DeployCode {
    pub fn size(&self) -> usize {
        get_var_size_bytes(&self.code)
            + 1
            + get_var_size_str(&self.name)
            + get_var_size_str(&self.version)
            + get_var_size_str(&self.author)
            + get_var_size_str(&self.email)
            + get_var_size_str(&self.description)
    }

    pub fn serialize(&self, writer: &mut BinaryWriter) {
        writer.write_var_bytes(&self.code);
        writer.write_u8(self.need_storage);
        writer.write_var_string(&self.name);
        writer.write_var_string(&self.version);
        writer.write_var_string(&self.author);
        writer.write_var_string(&self.email);
        writer.write_var_string(&self.description);
    }

    pub fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            code: reader.read_var_bytes(MAX_TX_SIZE)?.to_vec(),
            need_storage: reader.read_u8()?,
            name: reader.read_var_string(MAX_TX_SIZE)?,
            version: reader.read_var_string(MAX_TX_SIZE)?,
            author: reader.read_var_string(MAX_TX_SIZE)?,
            email: reader.read_var_string(MAX_TX_SIZE)?,
            description: reader.read_var_string(MAX_TX_SIZE)?,
        })
    }
}

/// Invocation payload; for Wasm this holds a serialized `ContractInvokeParam`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvokeCode {
    pub code: Vec<u8>,
}

impl InvokeCode {
    pub fn size(&self) -> usize {
        get_var_size_bytes(&self.code)
    }

    pub fn serialize(&self, writer: &mut BinaryWriter) {
        writer.write_var_bytes(&self.code);
    }

    pub fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            code: reader.read_var_bytes(MAX_TX_SIZE)?.to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    DeployCode(DeployCode),
    InvokeCode(InvokeCode),
}

impl Payload {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DeployCode(_) => "deploy_code",
            Self::InvokeCode(_) => "invoke_code",
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Self::DeployCode(deploy) => deploy.size(),
            Self::InvokeCode(invoke) => invoke.size(),
        }
    }

    pub fn serialize(&self, writer: &mut BinaryWriter) {
        match self {
            Self::DeployCode(deploy) => deploy.serialize(writer),
            Self::InvokeCode(invoke) => invoke.serialize(writer),
        }
    }

    pub fn as_deploy(&self) -> Option<&DeployCode> {
        match self {
            Self::DeployCode(deploy) => Some(deploy),
            _ => None,
        }
    }

    pub fn as_invoke(&self) -> Option<&InvokeCode> {
        match self {
            Self::InvokeCode(invoke) => Some(invoke),
            _ => None,
        }
    }
}

impl From<DeployCode> for Payload {
    fn from(value: DeployCode) -> Self {
        Self::DeployCode(value)
    }
}

impl From<InvokeCode> for Payload {
    fn from(value: InvokeCode) -> Self {
        Self::InvokeCode(value)
    }
}
