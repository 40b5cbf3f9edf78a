//! Subcommand implementations.
//!
//! Each command returns the text to print on stdout.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use ont_config::ClientConfig;
use ont_contract::{DeployMetadata, WasmContract};
use ont_core::{Account, ContractInvokeParam, Payload, Signer, Transaction};
use ont_io::Serializable;
use ont_primitives::Address;
use ont_wasm_abi::{ContractAbi, WasmValue};
use serde_json::Value;
use tracing::info;

use crate::args::{CliArgs, Command, DeployArgs, InvokeArgs, ParamsArgs};

/// Leading bytes of every Wasm module.
const WASM_MAGIC: &[u8] = b"\0asm";

pub fn run(args: &CliArgs, config: &ClientConfig) -> Result<String> {
    match &args.command {
        Command::Deploy(deploy) => run_deploy(args, config, deploy),
        Command::Params(params) => run_params(args, config, params),
        Command::Invoke(invoke) => run_invoke(args, config, invoke),
        Command::Inspect { tx } => run_inspect(tx),
        Command::Abi { path } => run_abi(path),
    }
}

fn parse_address(value: &str, what: &str) -> Result<Address> {
    value
        .parse()
        .with_context(|| format!("invalid {what} address {value}"))
}

fn payer_address(args: &CliArgs, config: &ClientConfig) -> Result<Option<Address>> {
    match &args.payer {
        Some(value) => parse_address(value, "payer").map(Some),
        None => Ok(config.account.address),
    }
}

/// The paying account. Required for anything that builds a transaction.
fn payer(args: &CliArgs, config: &ClientConfig) -> Result<Account> {
    let Some(address) = payer_address(args, config)? else {
        bail!("no payer address given; pass --payer or set [account] address");
    };
    let mut account = Account::new(address);
    account.label = config.account.label.clone();
    Ok(account)
}

fn contract(args: &CliArgs, config: &ClientConfig, signer: Arc<dyn Signer>) -> Result<WasmContract> {
    let address = match &args.contract {
        Some(value) => parse_address(value, "contract")?,
        None => match config.contract.address {
            Some(address) => address,
            None => bail!("no contract address given; pass --contract or set [contract] address"),
        },
    };
    Ok(WasmContract::new(address, signer, &config.transaction))
}

/// Resolves `--code`: inline hex, or `@FILE` holding hex text or a raw Wasm module.
fn read_code(code: &str) -> Result<String> {
    let Some(path) = code.strip_prefix('@') else {
        return Ok(strip_hex_prefix(code.trim()).to_string());
    };
    let bytes = fs::read(path).with_context(|| format!("failed to read contract code {path}"))?;
    if bytes.starts_with(WASM_MAGIC) {
        return Ok(hex::encode(bytes));
    }
    let text = String::from_utf8(bytes).with_context(|| format!("{path} is neither hex text nor a wasm module"))?;
    Ok(strip_hex_prefix(text.trim()).to_string())
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

fn parse_json_args(args: &[String]) -> Result<Vec<Value>> {
    args.iter()
        .map(|arg| serde_json::from_str(arg).with_context(|| format!("argument {arg} is not valid JSON")))
        .collect()
}

fn render_transaction(tx: &Transaction) -> Result<String> {
    let hash = tx.hash()?;
    let bytes = tx.to_array()?;
    info!(
        target: "ont_cli",
        tx_type = %tx.tx_type,
        hash = %hash,
        size = bytes.len(),
        "transaction ready for signing"
    );
    Ok(format!("hash: {}\ntx: {}\n", hash, hex::encode(bytes)))
}

fn run_deploy(args: &CliArgs, config: &ClientConfig, deploy: &DeployArgs) -> Result<String> {
    let account = Arc::new(payer(args, config)?);
    let address = args
        .contract
        .as_deref()
        .map(|value| parse_address(value, "contract"))
        .transpose()?
        .unwrap_or_default();
    let contract = WasmContract::new(address, account.clone(), &config.transaction);

    let code = read_code(&deploy.code)?;
    let metadata = DeployMetadata::new(
        deploy.name.as_str(),
        deploy.version.as_str(),
        deploy.author.as_str(),
        deploy.email.as_str(),
        deploy.description.as_str(),
    );
    let tx = contract.deploy(
        deploy.gas_price.unwrap_or(config.transaction.gas_price),
        deploy.gas_limit.unwrap_or(config.transaction.gas_limit),
        account.as_ref(),
        deploy.need_storage,
        &code,
        metadata,
    )?;
    render_transaction(&tx)
}

fn run_params(args: &CliArgs, config: &ClientConfig, params: &ParamsArgs) -> Result<String> {
    // Invoke parameters carry no payer, so none has to be configured.
    let address = payer_address(args, config)?.unwrap_or_default();
    let contract = contract(args, config, Arc::new(Account::new(address)))?;
    let values = parse_json_args(&params.args)?
        .iter()
        .map(WasmValue::infer)
        .collect::<Result<Vec<_>, _>>()?;
    let bytes = contract.build_params(&params.method, &values)?;
    Ok(format!("{}\n", hex::encode(bytes)))
}

fn run_invoke(args: &CliArgs, config: &ClientConfig, invoke: &InvokeArgs) -> Result<String> {
    let contract = contract(args, config, Arc::new(payer(args, config)?))?;
    let abi = ContractAbi::load(&invoke.abi)?;
    let values = parse_json_args(&invoke.args)?;
    let tx = contract.invoke_json(&abi, &invoke.method, &values)?;
    render_transaction(&tx)
}

fn run_inspect(tx_hex: &str) -> Result<String> {
    let bytes = hex::decode(strip_hex_prefix(tx_hex.trim())).context("transaction is not valid hex")?;
    let tx = Transaction::from_bytes(&bytes)?;

    let mut out = String::new();
    writeln!(out, "hash: {}", tx.hash()?)?;
    writeln!(out, "type: {}", tx.tx_type)?;
    writeln!(out, "version: {}", tx.version)?;
    writeln!(out, "nonce: {}", tx.nonce)?;
    writeln!(out, "gas_price: {}", tx.gas_price)?;
    writeln!(out, "gas_limit: {}", tx.gas_limit)?;
    writeln!(out, "payer: {}", tx.payer)?;
    writeln!(out, "sigs: {}", tx.sigs.len())?;

    match &tx.payload {
        Payload::DeployCode(deploy) => {
            writeln!(out, "code: {}", hex::encode(&deploy.code))?;
            writeln!(out, "need_storage: {}", deploy.need_storage)?;
            writeln!(out, "name: {}", deploy.name)?;
            writeln!(out, "contract_version: {}", deploy.version)?;
            writeln!(out, "author: {}", deploy.author)?;
            writeln!(out, "email: {}", deploy.email)?;
            writeln!(out, "description: {}", deploy.description)?;
        }
        Payload::InvokeCode(invoke) => match ContractInvokeParam::from_array(&invoke.code) {
            Ok(param) => {
                writeln!(out, "contract: {}", param.address.to_hex_string())?;
                writeln!(out, "method: {}", param.method)?;
                writeln!(out, "args: {}", hex::encode(&param.args))?;
            }
            Err(_) => writeln!(out, "code: {}", hex::encode(&invoke.code))?,
        },
    }
    Ok(out)
}

fn run_abi(path: &Path) -> Result<String> {
    let abi = ContractAbi::load(path)?;
    let binding = ContractAbi::binding_name(&path.to_string_lossy())?;

    let mut out = String::new();
    writeln!(out, "{binding}")?;
    for function in &abi.functions {
        writeln!(out, "  {}", function.signature())?;
    }
    Ok(out)
}
