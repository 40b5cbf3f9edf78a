//! Deploy transactions.

use ont_core::{DeployCode, Signer, Transaction, TransactionType};
use tracing::debug;

use crate::error::ContractResult;
use crate::wasm_contract::WasmContract;

/// Descriptive fields recorded on chain alongside the contract code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployMetadata {
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

impl DeployMetadata {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            author: author.into(),
            email: email.into(),
            description: description.into(),
        }
    }
}

impl WasmContract {
    /// Builds an unsigned deploy transaction for hex-encoded contract code.
    ///
    /// The nonce is the current time from the contract's time source, in
    /// seconds truncated to 32 bits. `signer` pays for the deployment.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Decode` when `code` has odd length or a
    /// non-hex character. Nothing is built in that case.
    pub fn deploy(
        &self,
        gas_price: u64,
        gas_limit: u64,
        signer: &dyn Signer,
        need_storage: u8,
        code: &str,
        metadata: DeployMetadata,
    ) -> ContractResult<Transaction> {
        let code = hex::decode(code)?;
        let payload = DeployCode {
            code,
            need_storage,
            name: metadata.name,
            version: metadata.version,
            author: metadata.author,
            email: metadata.email,
            description: metadata.description,
        };

        let tx = Transaction::new(
            TransactionType::Deploy,
            self.nonce(),
            gas_price,
            gas_limit,
            signer.address(),
            payload.into(),
        );
        debug!(
            target: "ont_contract",
            nonce = tx.nonce,
            code_len = tx.payload.as_deploy().map_or(0, |p| p.code.len()),
            "deploy transaction built"
        );
        Ok(tx)
    }
}
