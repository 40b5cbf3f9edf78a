// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # Ont Core
//!
//! Transaction model for deploying and invoking Ontology Wasm contracts.
//!
//! ## Features
//!
//! - **Transactions**: `Transaction`, `TransactionType` and their wire format
//! - **Payloads**: `DeployCode` and `InvokeCode`
//! - **Invoke parameters**: `ContractInvokeParam`, the argument envelope read
//!   by the Wasm VM
//! - **Time**: pluggable `TimeSource` used to derive nonces
//! - **Signers**: the `Signer` seam that supplies the payer address
//!
//! ## Example
//!
//! ```rust
//! use ont_core::{DeployCode, Payload, Transaction, TransactionType};
//! use ont_primitives::Address;
//!
//! let payload = DeployCode {
//!     code: vec![0x00, 0x61, 0x73, 0x6d],
//!     need_storage: 3,
//!     name: "demo".into(),
//!     version: "1.0".into(),
//!     author: "dev".into(),
//!     email: "dev@example.com".into(),
//!     description: "demo contract".into(),
//! };
//! let tx = Transaction::new(
//!     TransactionType::Deploy,
//!     1,
//!     2500,
//!     20000,
//!     Address::zero(),
//!     Payload::DeployCode(payload),
//! );
//! assert!(tx.sigs.is_empty());
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

/// Invocation envelope handed to the Wasm VM
pub mod contract_invoke_param;
/// Core error types
pub mod error;
/// Payer/signer abstraction
pub mod signer;
/// Pluggable time source
pub mod time_provider;
/// Transaction structures and serialization
pub mod transaction;

pub use contract_invoke_param::ContractInvokeParam;
pub use error::{CoreError, CoreResult};
pub use signer::{Account, Signer};
pub use time_provider::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use transaction::{
    DeployCode, InvokeCode, Payload, Sig, Transaction, TransactionType, MAX_SIG_COUNT,
    MAX_TX_SIZE, VERSION_TRANSACTION,
};
