// Copyright (C) 2025 The ont-wasm-rs Authors.
//
// wasm_contract.rs file belongs to the ont-wasm-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::fmt;
use std::sync::Arc;

use ont_config::{ClientConfig, TransactionConfig};
use ont_core::{Signer, SystemTimeSource, TimeSource};
use ont_primitives::Address;

use crate::error::{ContractError, ContractResult};

/// Handle on one deployed (or about to be deployed) Wasm contract.
///
/// Holds everything needed to build transactions against the contract.
/// Building never mutates the handle, so one instance can be shared
/// across threads.
#[derive(Clone)]
pub struct WasmContract {
    pub(crate) address: Address,
    pub(crate) signer: Arc<dyn Signer>,
    pub(crate) gas_price: u64,
    pub(crate) gas_limit: u64,
    pub(crate) version: u8,
    pub(crate) time_source: Arc<dyn TimeSource>,
}

impl WasmContract {
    /// Creates a handle reading nonces from the system clock.
    pub fn new(address: Address, signer: Arc<dyn Signer>, config: &TransactionConfig) -> Self {
        Self {
            address,
            signer,
            gas_price: config.gas_price,
            gas_limit: config.gas_limit,
            version: config.contract_version,
            time_source: Arc::new(SystemTimeSource),
        }
    }

    /// Creates a handle for the contract named in `config`.
    ///
    /// # Errors
    ///
    /// Fails when the config has no `[contract] address`.
    pub fn from_config(config: &ClientConfig, signer: Arc<dyn Signer>) -> ContractResult<Self> {
        let address = config
            .contract
            .address
            .ok_or_else(|| ContractError::Config("no contract address configured".into()))?;
        Ok(Self::new(address, signer, &config.transaction))
    }

    #[must_use]
    pub fn with_time_source(mut self, time_source: Arc<dyn TimeSource>) -> Self {
        self.time_source = time_source;
        self
    }

    #[must_use]
    pub fn with_gas(mut self, gas_price: u64, gas_limit: u64) -> Self {
        self.gas_price = gas_price;
        self.gas_limit = gas_limit;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn signer(&self) -> &dyn Signer {
        self.signer.as_ref()
    }

    pub fn gas_price(&self) -> u64 {
        self.gas_price
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub(crate) fn nonce(&self) -> u32 {
        self.time_source.nonce()
    }
}

impl fmt::Debug for WasmContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WasmContract")
            .field("address", &self.address)
            .field("payer", &self.signer.address())
            .field("gas_price", &self.gas_price)
            .field("gas_limit", &self.gas_limit)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
