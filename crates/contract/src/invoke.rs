//! Invocation parameters and invoke transactions.

use ont_core::{ContractInvokeParam, InvokeCode, Transaction, TransactionType};
use ont_io::Serializable;
use ont_wasm_abi::{encode_args, ContractAbi, WasmValue};
use serde_json::Value;
use tracing::debug;

use crate::error::{ContractError, ContractResult};
use crate::wasm_contract::WasmContract;

impl WasmContract {
    /// The invoke envelope for `method` with `args` already encoded.
    pub fn invoke_param(&self, method: &str, args: &[WasmValue]) -> ContractResult<ContractInvokeParam> {
        Ok(ContractInvokeParam {
            version: self.version,
            address: self.address,
            method: method.to_string(),
            args: encode_args(args)?,
        })
    }

    /// Serialized invoke parameters for `method`:
    /// `version | address | method | args`.
    pub fn build_params(&self, method: &str, args: &[WasmValue]) -> ContractResult<Vec<u8>> {
        Ok(self.invoke_param(method, args)?.to_array()?)
    }

    /// Builds an unsigned `InvokeWasm` transaction calling `method`.
    ///
    /// Gas and payer come from the contract handle.
    pub fn invoke(&self, method: &str, args: &[WasmValue]) -> ContractResult<Transaction> {
        let code = self.build_params(method, args)?;
        let tx = Transaction::new(
            TransactionType::InvokeWasm,
            self.nonce(),
            self.gas_price,
            self.gas_limit,
            self.signer.address(),
            InvokeCode { code }.into(),
        );
        debug!(
            target: "ont_contract",
            contract = %self.address.to_hex_string(),
            method,
            args = args.len(),
            nonce = tx.nonce,
            "invoke transaction built"
        );
        Ok(tx)
    }

    /// Like [`invoke`](Self::invoke), converting JSON arguments with the
    /// parameter types `abi` declares for `method`.
    pub fn invoke_json(&self, abi: &ContractAbi, method: &str, args: &[Value]) -> ContractResult<Transaction> {
        let function = abi
            .function(method)
            .ok_or_else(|| ContractError::Abi(format!("method {method} not found in abi")))?;
        if function.parameters.len() != args.len() {
            return Err(ContractError::Abi(format!(
                "{} expects {} arguments, got {}",
                function.signature(),
                function.parameters.len(),
                args.len()
            )));
        }

        let values = function
            .param_types()?
            .iter()
            .zip(args)
            .map(|(ty, arg)| WasmValue::from_json(ty, arg))
            .collect::<Result<Vec<_>, _>>()?;
        self.invoke(method, &values)
    }
}
