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

//! # Ont Wasm ABI
//!
//! Encoding of invocation arguments for the Ontology Wasm VM.
//!
//! Arguments are modelled as [`WasmValue`], one variant per type the
//! contract runtime can decode. Encoding a `WasmValue` list is total except
//! for out-of-range big integers; loosely typed input (JSON) is converted
//! through [`WasmValue::infer`] or, when an ABI is available,
//! [`WasmValue::from_json`], and that conversion is where unsupported
//! values are rejected.
//!
//! ## Example
//!
//! ```rust
//! use ont_wasm_abi::{decode_args, encode_args, ParamType, WasmValue};
//!
//! let args = vec![WasmValue::String("hello".into()), WasmValue::I128(-1)];
//! let bytes = encode_args(&args).unwrap();
//!
//! let decoded = decode_args(&bytes, &[ParamType::String, ParamType::I128]).unwrap();
//! assert_eq!(decoded, args);
//! ```

pub mod abi;
mod codec;
pub mod error;
mod json;
pub mod param_type;
pub mod value;

pub use abi::{AbiFunction, AbiParameter, ContractAbi};
pub use codec::{decode_args, encode_args};
pub use error::{AbiError, EncodingError, EncodingResult};
pub use param_type::ParamType;
pub use value::WasmValue;
