// Copyright (C) 2015-2025 The Neo Project.
//
// serialization.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction wire format.
//!
//! ```text
//! version:u8 | tx_type:u8 | nonce:u32 | gas_price:u64 | gas_limit:u64 | payer:[20]
//! | payload | attributes:var_int(0) | sigs:var_int(n) + n * sig
//! ```

use ont_io::serializable::{deserialize_array, get_var_size_slice, serialize_array};
use ont_io::{get_var_size, BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use ont_primitives::Address;

use super::core::{
    Transaction, TransactionType, HEADER_SIZE, MAX_SIG_COUNT, MAX_TX_SIZE, VERSION_TRANSACTION,
};
use super::payload::{DeployCode, InvokeCode, Payload};
use crate::error::CoreResult;

impl Transaction {
    fn unsigned_size(&self) -> usize {
        // Attributes are always written as an empty list.
        HEADER_SIZE + self.payload.size() + get_var_size(0)
    }

    fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.version);
        writer.write_u8(self.tx_type as u8);
        writer.write_u32(self.nonce);
        writer.write_u64(self.gas_price);
        writer.write_u64(self.gas_limit);
        self.payer.serialize(writer)?;
        self.payload.serialize(writer);
        writer.write_var_int(0);
        Ok(())
    }

    /// The bytes covered by the transaction hash and by signatures.
    pub fn unsigned_bytes(&self) -> CoreResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.unsigned_size());
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Decodes a transaction and checks its payload matches its type.
    pub fn from_bytes(data: &[u8]) -> CoreResult<Self> {
        let tx = <Self as Serializable>::from_array(data)?;
        tx.check_payload()?;
        Ok(tx)
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        self.unsigned_size() + get_var_size_slice(&self.sigs)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        let size = Serializable::size(self);
        if size > MAX_TX_SIZE {
            return Err(IoError::format(format!(
                "transaction size {size} exceeds maximum {MAX_TX_SIZE}"
            )));
        }
        if self.sigs.len() > MAX_SIG_COUNT {
            return Err(IoError::invalid_data("sigs", format!("count {}", self.sigs.len())));
        }

        self.serialize_unsigned(writer)?;
        serialize_array(&self.sigs, writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let start = reader.position();
        let version = reader.read_u8()?;
        if version != VERSION_TRANSACTION {
            return Err(IoError::invalid_data("version", version));
        }

        let type_byte = reader.read_u8()?;
        let tx_type = TransactionType::try_from(type_byte)
            .map_err(|_| IoError::invalid_data("tx_type", format!("{type_byte:#04x}")))?;

        let nonce = reader.read_u32()?;
        let gas_price = reader.read_u64()?;
        let gas_limit = reader.read_u64()?;
        let payer = Address::deserialize(reader)?;

        let payload = match tx_type {
            TransactionType::Deploy => Payload::DeployCode(DeployCode::deserialize(reader)?),
            TransactionType::InvokeNeo | TransactionType::InvokeWasm => {
                Payload::InvokeCode(InvokeCode::deserialize(reader)?)
            }
        };

        let attr_count = reader.read_var_int(u64::MAX)?;
        if attr_count != 0 {
            return Err(IoError::invalid_data("attributes", format!("count {attr_count}")));
        }

        let sigs = deserialize_array(reader, MAX_SIG_COUNT)?;

        let size = reader.position() - start;
        if size > MAX_TX_SIZE {
            return Err(IoError::format(format!(
                "transaction size {size} exceeds maximum {MAX_TX_SIZE}"
            )));
        }

        Ok(Self {
            version,
            tx_type,
            nonce,
            gas_price,
            gas_limit,
            payer,
            payload,
            sigs,
        })
    }
}
