//! # Ont Primitives
//!
//! Fixed-size identifiers used throughout the Ontology transaction model:
//! - `Address`: 20-byte account or contract address
//! - `H256`: 32-byte hash (transaction hashes)
//!
//! ## Example
//!
//! ```rust
//! use ont_primitives::Address;
//!
//! let zero = Address::zero();
//! assert_eq!(zero.to_base58(), "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM");
//! ```

pub mod address;
pub mod constants;
pub mod error;
pub mod h256;

pub use address::{Address, ADDRESS_SIZE};
pub use constants::*;
pub use error::{PrimitiveError, PrimitiveResult};
pub use h256::{H256, H256_SIZE};

use sha2::{Digest, Sha256};

/// SHA-256 applied twice, as used for address checksums and transaction hashes.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    second.into()
}
