use anyhow::Result;
use clap::Parser;
use ont_cli::{run, CliArgs};
use ont_config::ClientConfig;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };

    init_tracing(&config.logger.level);
    debug!(target: "ont_cli", ?config, "configuration resolved");

    let output = run(&args, &config)?;
    print!("{output}");
    Ok(())
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
