use std::sync::Arc;

use ont_config::TransactionConfig;
use ont_contract::{ContractError, DeployMetadata, WasmContract};
use ont_core::{Account, ContractInvokeParam, FixedTimeSource, Transaction, TransactionType};
use ont_io::Serializable;
use ont_primitives::Address;
use proptest::prelude::*;

fn contract_at(seconds: i64) -> (WasmContract, Account) {
    let payer = Account::new(Address::new([5; 20]));
    let contract = WasmContract::new(
        Address::zero(),
        Arc::new(payer.clone()),
        &TransactionConfig::default(),
    )
    .with_time_source(Arc::new(FixedTimeSource::from_unix_seconds(seconds)));
    (contract, payer)
}

fn metadata() -> DeployMetadata {
    DeployMetadata::new("MyContract", "1.0", "a@b.com", "x@y.com", "desc")
}

#[test]
fn test_deploy_example() {
    let (contract, payer) = contract_at(1_600_000_000);
    let tx = contract
        .deploy(500, 20000, &payer, 0, "4d5a", metadata())
        .unwrap();
    assert_eq!(tx.payload.as_deploy().unwrap().code, vec![0x4D, 0x5A]);
    assert_eq!(tx.tx_type, TransactionType::Deploy);
    assert!(tx.sigs.is_empty());

    // The wire form decodes back to the same transaction.
    let bytes = tx.to_array().unwrap();
    assert_eq!(Transaction::from_bytes(&bytes).unwrap(), tx);
}

#[test]
fn test_invoke_transaction_decodes() {
    let (contract, _) = contract_at(10);
    let tx = contract.invoke("init", &[]).unwrap();
    let decoded = Transaction::from_bytes(&tx.to_array().unwrap()).unwrap();
    assert_eq!(decoded.tx_type, TransactionType::InvokeWasm);
    assert_eq!(decoded, tx);
}

#[test]
fn test_large_metadata_roundtrip() {
    let (contract, payer) = contract_at(1);
    let metadata = DeployMetadata::new("n", "1", "a", "e", "d".repeat(20_000));
    let tx = contract.deploy(0, 1, &payer, 0, "4d5a", metadata).unwrap();

    let decoded = Transaction::from_bytes(&tx.to_array().unwrap()).unwrap();
    assert_eq!(decoded.payload.as_deploy().unwrap().description.len(), 20_000);
    assert_eq!(decoded, tx);
}

#[test]
fn test_long_method_name_roundtrip() {
    let (contract, _) = contract_at(1);
    let method = "m".repeat(2000);
    let bytes = contract.build_params(&method, &[]).unwrap();
    assert_eq!(ContractInvokeParam::from_array(&bytes).unwrap().method, method);

    let tx = contract.invoke(&method, &[]).unwrap();
    assert_eq!(Transaction::from_bytes(&tx.to_array().unwrap()).unwrap(), tx);
}

#[test]
fn test_oversized_deploy_is_refused_on_encode() {
    let (contract, payer) = contract_at(1);
    let code = "00".repeat(1024 * 1024);
    let tx = contract.deploy(0, 1, &payer, 0, &code, metadata()).unwrap();
    assert!(tx.to_array().is_err());
}

proptest! {
    #[test]
    fn test_hex_code_roundtrip(code in proptest::collection::vec(any::<u8>(), 0..512)) {
        let (contract, payer) = contract_at(1);
        let hex_code = hex::encode(&code);
        let tx = contract.deploy(0, 1, &payer, 0, &hex_code, metadata()).unwrap();
        let decoded = &tx.payload.as_deploy().unwrap().code;
        prop_assert_eq!(decoded, &code);
        prop_assert_eq!(hex::encode(decoded), hex_code);
    }

    #[test]
    fn test_odd_length_hex_fails(code in "[0-9a-f]{0,63}") {
        prop_assume!(code.len() % 2 == 1);
        let (contract, payer) = contract_at(1);
        let result = contract.deploy(0, 1, &payer, 0, &code, metadata());
        prop_assert!(matches!(result, Err(ContractError::Decode(_))));
    }

    #[test]
    fn test_non_hex_fails(prefix in "([0-9a-f]{2}){0,8}", bad in "[g-zG-Z]{2}") {
        let (contract, payer) = contract_at(1);
        let code = format!("{prefix}{bad}");
        let result = contract.deploy(0, 1, &payer, 0, &code, metadata());
        prop_assert!(matches!(result, Err(ContractError::Decode(_))));
    }

    #[test]
    fn test_deploy_is_deterministic(seconds in 0i64..4_000_000_000, gas_price in any::<u64>()) {
        let (contract, payer) = contract_at(seconds);
        let first = contract.deploy(gas_price, 20000, &payer, 3, "0061736d", metadata()).unwrap();
        let second = contract.deploy(gas_price, 20000, &payer, 3, "0061736d", metadata()).unwrap();
        prop_assert_eq!(first.nonce, seconds as u32);
        prop_assert_eq!(first.to_array().unwrap(), second.to_array().unwrap());
    }
}
