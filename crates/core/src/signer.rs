//! Payer abstraction.
//!
//! Signing happens outside this workspace; builders only need to know which
//! address pays for a transaction.

use ont_primitives::Address;
use serde::{Deserialize, Serialize};

/// Anything that can pay for and later sign a transaction.
pub trait Signer: Send + Sync {
    /// Address recorded as the transaction payer.
    fn address(&self) -> Address;
}

/// An account known only by its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    #[serde(default)]
    pub label: Option<String>,
}

impl Account {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Signer for Account {
    fn address(&self) -> Address {
        self.address
    }
}

impl<S: Signer + ?Sized> Signer for &S {
    fn address(&self) -> Address {
        (**self).address()
    }
}
