// Copyright (C) 2015-2025 The Neo Project.
//
// core.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::fmt;

use ont_primitives::{sha256d, Address, H256};
use serde::{Deserialize, Serialize};

use super::payload::Payload;
use super::sig::Sig;
use crate::error::{CoreError, CoreResult};

/// The only transaction version currently accepted by nodes.
pub const VERSION_TRANSACTION: u8 = 0;

/// Largest encoded transaction accepted, 1 MiB.
pub const MAX_TX_SIZE: usize = 1024 * 1024;

/// Maximum number of signatures attached to one transaction.
pub const MAX_SIG_COUNT: usize = 16;

/// Size of the fixed header: version, type, nonce, gas price, gas limit, payer.
pub const HEADER_SIZE: usize = 1 + 1 + 4 + 8 + 8 + 20;

/// Transaction type tag, written as a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransactionType {
    Deploy = 0xd0,
    InvokeNeo = 0xd1,
    InvokeWasm = 0xd2,
}

impl TransactionType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Deploy => "deploy",
            Self::InvokeNeo => "invoke_neo",
            Self::InvokeWasm => "invoke_wasm",
        }
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0xd0 => Ok(Self::Deploy),
            0xd1 => Ok(Self::InvokeNeo),
            0xd2 => Ok(Self::InvokeWasm),
            other => Err(CoreError::UnknownTransactionType(other)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unsigned (or partially signed) transaction.
///
/// Fields stay public so an external signer can append to `sigs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u8,
    pub tx_type: TransactionType,
    pub nonce: u32,
    pub gas_price: u64,
    pub gas_limit: u64,
    pub payer: Address,
    pub payload: Payload,
    pub sigs: Vec<Sig>,
}

impl Transaction {
    /// Creates a version-0 transaction with no signatures.
    pub fn new(
        tx_type: TransactionType,
        nonce: u32,
        gas_price: u64,
        gas_limit: u64,
        payer: Address,
        payload: Payload,
    ) -> Self {
        Self {
            version: VERSION_TRANSACTION,
            tx_type,
            nonce,
            gas_price,
            gas_limit,
            payer,
            payload,
            sigs: Vec::new(),
        }
    }

    /// Checks that the payload kind matches `tx_type`.
    pub fn check_payload(&self) -> CoreResult<()> {
        let ok = matches!(
            (self.tx_type, &self.payload),
            (TransactionType::Deploy, Payload::DeployCode(_))
                | (TransactionType::InvokeNeo, Payload::InvokeCode(_))
                | (TransactionType::InvokeWasm, Payload::InvokeCode(_))
        );
        if ok {
            Ok(())
        } else {
            Err(CoreError::PayloadMismatch {
                tx_type: self.tx_type.name(),
                payload: self.payload.kind(),
            })
        }
    }

    /// Transaction hash: double SHA-256 over the unsigned encoding.
    pub fn hash(&self) -> CoreResult<H256> {
        let unsigned = self.unsigned_bytes()?;
        Ok(H256::new(sha256d(&unsigned)))
    }
}
