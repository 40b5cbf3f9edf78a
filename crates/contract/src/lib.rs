// Copyright (C) 2025 The ont-wasm-rs Authors.
//
// lib.rs file belongs to the ont-wasm-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # Ont Contract
//!
//! Transaction builders for Ontology Wasm contracts.
//!
//! A [`WasmContract`] pairs a contract address with a payer, gas settings
//! and a clock. From it you can build:
//!
//! - deploy transactions from hex-encoded contract code ([`WasmContract::deploy`])
//! - serialized invoke parameters ([`WasmContract::build_params`])
//! - invoke transactions, from typed values or from JSON checked against
//!   a contract ABI ([`WasmContract::invoke`], [`WasmContract::invoke_json`])
//!
//! Built transactions are unsigned.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use ont_config::TransactionConfig;
//! use ont_contract::{DeployMetadata, WasmContract};
//! use ont_core::{Account, FixedTimeSource, TransactionType};
//! use ont_primitives::Address;
//! use ont_wasm_abi::WasmValue;
//!
//! let payer = Arc::new(Account::new(Address::zero()));
//! let contract = WasmContract::new(Address::zero(), payer.clone(), &TransactionConfig::default())
//!     .with_time_source(Arc::new(FixedTimeSource::from_unix_seconds(1_600_000_000)));
//!
//! let metadata = DeployMetadata::new("MyContract", "1.0", "a@b.com", "x@y.com", "desc");
//! let tx = contract.deploy(500, 20000, payer.as_ref(), 0, "4d5a", metadata).unwrap();
//! assert_eq!(tx.tx_type, TransactionType::Deploy);
//!
//! let params = contract.build_params("balanceOf", &[WasmValue::Address(Address::zero())]).unwrap();
//! assert_eq!(params[0], 0);
//! ```

mod deploy;
pub mod error;
mod invoke;
mod wasm_contract;

pub use deploy::DeployMetadata;
pub use error::{ContractError, ContractResult};
pub use wasm_contract::WasmContract;
