use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line arguments for ont-wasm
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ont-wasm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build unsigned Ontology Wasm contract transactions"
)]
pub struct CliArgs {
    /// Specifies the TOML config file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        env = "ONT_WASM_CONFIG",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Overrides the configured payer address (base58 or hex)
    #[arg(long = "payer", value_name = "ADDRESS", global = true)]
    pub payer: Option<String>,

    /// Overrides the configured contract address (base58 or hex)
    #[arg(long = "contract", value_name = "ADDRESS", global = true)]
    pub contract: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a deploy transaction
    Deploy(DeployArgs),
    /// Encode invoke parameters, inferring argument types from JSON
    Params(ParamsArgs),
    /// Build an invoke transaction, typing arguments from a contract ABI
    Invoke(InvokeArgs),
    /// Decode a hex-encoded transaction
    Inspect {
        /// Transaction bytes as hex
        #[arg(value_name = "HEX")]
        tx: String,
    },
    /// List the functions of a contract ABI file
    Abi {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    /// Contract code as hex, or @FILE to read it from a file
    #[arg(long = "code", value_name = "HEX|@FILE")]
    pub code: String,

    #[arg(long = "name")]
    pub name: String,

    #[arg(long = "version")]
    pub version: String,

    #[arg(long = "author")]
    pub author: String,

    #[arg(long = "email")]
    pub email: String,

    #[arg(long = "desc")]
    pub description: String,

    /// Storage flag byte (3 selects the Wasm VM on current nodes)
    #[arg(long = "need-storage", default_value_t = 0)]
    pub need_storage: u8,

    #[arg(long = "gas-price")]
    pub gas_price: Option<u64>,

    #[arg(long = "gas-limit")]
    pub gas_limit: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ParamsArgs {
    #[arg(long = "method")]
    pub method: String,

    /// Argument as JSON, repeated in call order
    #[arg(long = "arg", value_name = "JSON", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct InvokeArgs {
    /// Contract ABI file
    #[arg(long = "abi", value_name = "FILE")]
    pub abi: PathBuf,

    #[arg(long = "method")]
    pub method: String,

    /// Argument as JSON, repeated in call order
    #[arg(long = "arg", value_name = "JSON", allow_hyphen_values = true)]
    pub args: Vec<String>,
}
