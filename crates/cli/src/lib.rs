//! ont-wasm command-line tool.
//!
//! Builds unsigned deploy and invoke transactions for Ontology Wasm
//! contracts and prints them hex-encoded for an external signer.

pub mod args;
pub mod commands;

pub use args::CliArgs;
pub use commands::run;
