//! Transaction types and their binary encoding.

mod core;
mod payload;
mod serialization;
mod sig;

pub use self::core::{
    Transaction, TransactionType, MAX_SIG_COUNT, MAX_TX_SIZE, VERSION_TRANSACTION,
};
pub use payload::{DeployCode, InvokeCode, Payload};
pub use sig::Sig;
