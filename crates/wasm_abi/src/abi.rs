//! Contract ABI description, as emitted by the Wasm contract toolchain.
//!
//! ```json
//! {
//!   "CompilerVersion": "1.0",
//!   "hash": "0x…",
//!   "entrypoint": "invoke",
//!   "functions": [
//!     { "name": "transfer",
//!       "parameters": [ { "name": "from", "type": "Address" } ] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AbiError, EncodingResult};
use crate::param_type::ParamType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAbi {
    #[serde(rename = "CompilerVersion", default)]
    pub compiler_version: String,
    #[serde(default)]
    pub hash: String,
    #[serde(rename = "entrypoint", default)]
    pub entry_point: String,
    #[serde(default)]
    pub functions: Vec<AbiFunction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiFunction {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<AbiParameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

impl ContractAbi {
    pub fn from_json_str(json: &str) -> Result<Self, AbiError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AbiError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AbiError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let abi = Self::from_json_str(&content)?;
        debug!(
            target: "ont_wasm_abi",
            path = %path.display(),
            functions = abi.functions.len(),
            "contract abi loaded"
        );
        Ok(abi)
    }

    pub fn function(&self, name: &str) -> Option<&AbiFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Name for a binding generated from the ABI file at `path`:
    /// the file stem with its first letter upper-cased, plus `Contract`.
    ///
    /// `"abi/oep4.json"` gives `"Oep4Contract"`.
    pub fn binding_name(path: &str) -> Result<String, AbiError> {
        let parts: Vec<&str> = path.split(['/', '\\', '.']).collect();
        if parts.len() < 2 {
            return Err(AbiError::InvalidPath(path.to_string()));
        }
        let stem = parts[parts.len() - 2];
        if stem.is_empty() {
            return Err(AbiError::InvalidPath(path.to_string()));
        }
        Ok(format!("{}Contract", upper_first(stem)))
    }
}

impl AbiFunction {
    pub fn param_types(&self) -> EncodingResult<Vec<ParamType>> {
        self.parameters.iter().map(AbiParameter::parsed_type).collect()
    }

    /// Method name as a generated binding would spell it.
    pub fn binding_name(&self) -> String {
        upper_first(&self.name)
    }

    /// Human readable signature, e.g. `transfer(from: Address, amount: U128)`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.param_type))
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

impl AbiParameter {
    pub fn parsed_type(&self) -> EncodingResult<ParamType> {
        self.param_type.parse()
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OEP4: &str = r#"{
        "CompilerVersion": "1.0.0",
        "hash": "0x1234",
        "entrypoint": "invoke",
        "functions": [
            { "name": "name", "parameters": [] },
            { "name": "balanceOf", "parameters": [ { "name": "owner", "type": "Address" } ] },
            { "name": "transfer", "parameters": [
                { "name": "from", "type": "Address" },
                { "name": "to", "type": "Address" },
                { "name": "amount", "type": "U128" }
            ] }
        ]
    }"#;

    #[test]
    fn test_parse_abi() {
        let abi = ContractAbi::from_json_str(OEP4).unwrap();
        assert_eq!(abi.compiler_version, "1.0.0");
        assert_eq!(abi.entry_point, "invoke");
        assert_eq!(abi.functions.len(), 3);

        let transfer = abi.function("transfer").unwrap();
        assert_eq!(
            transfer.param_types().unwrap(),
            vec![ParamType::Address, ParamType::Address, ParamType::U128]
        );
        assert_eq!(
            transfer.signature(),
            "transfer(from: Address, to: Address, amount: U128)"
        );
        assert!(abi.function("mint").is_none());
    }

    #[test]
    fn test_binding_names() {
        assert_eq!(ContractAbi::binding_name("abi/oep4.json").unwrap(), "Oep4Contract");
        assert_eq!(ContractAbi::binding_name("token.abi.json").unwrap(), "AbiContract");
        assert!(ContractAbi::binding_name("noextension").is_err());

        let abi = ContractAbi::from_json_str(OEP4).unwrap();
        assert_eq!(abi.function("balanceOf").unwrap().binding_name(), "BalanceOf");
    }

    #[test]
    fn test_unknown_parameter_type() {
        let abi = ContractAbi::from_json_str(
            r#"{ "functions": [ { "name": "f", "parameters": [ { "name": "x", "type": "f64" } ] } ] }"#,
        )
        .unwrap();
        assert!(abi.function("f").unwrap().param_types().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ContractAbi::from_json_str("{ not json"),
            Err(AbiError::Json(_))
        ));
    }
}
