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

//! # Ont IO
//!
//! Little-endian binary encoding used by Ontology transactions and Wasm
//! contract parameters.
//!
//! - [`BinaryWriter`] appends fixed-width integers, var-ints and var-bytes
//!   to a growable buffer.
//! - [`MemoryReader`] walks a borrowed slice and rejects truncated or
//!   non-canonical input.
//! - [`Serializable`] ties the two together for structured types.
//!
//! ## Example
//!
//! ```rust
//! use ont_io::{BinaryWriter, MemoryReader};
//!
//! let mut writer = BinaryWriter::new();
//! writer.write_var_string("init");
//! writer.write_u32(7);
//!
//! let bytes = writer.into_bytes();
//! let mut reader = MemoryReader::new(&bytes);
//! assert_eq!(reader.read_var_string(64).unwrap(), "init");
//! assert_eq!(reader.read_u32().unwrap(), 7);
//! ```

mod binary_writer;
mod io_error;
mod memory_reader;
pub mod serializable;

pub use binary_writer::BinaryWriter;
pub use io_error::{IoError, IoResult};
pub use memory_reader::MemoryReader;
pub use serializable::Serializable;

/// Returns the number of bytes required to encode `value` as a var-int.
#[inline]
pub fn get_var_size(value: u64) -> usize {
    if value < 0xFD {
        1
    } else if value <= 0xFFFF {
        1 + 2
    } else if value <= 0xFFFF_FFFF {
        1 + 4
    } else {
        1 + 8
    }
}

/// Size contribution of a byte slice written with `write_var_bytes`.
#[inline]
pub fn get_var_size_bytes(bytes: &[u8]) -> usize {
    get_var_size(bytes.len() as u64) + bytes.len()
}

/// Size contribution of a string written with `write_var_string`.
#[inline]
pub fn get_var_size_str(value: &str) -> usize {
    get_var_size_bytes(value.as_bytes())
}
