use clap::Parser;
use pubchemprops::{ClientConfig, PubChemClient};
use std::time::Duration;

mod cli;
mod commands;

use cli::Cli;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = ClientConfig::default()
        .with_api_base(&cli.api_base)
        .with_timeout(Duration::from_millis(cli.timeout_ms));
    tracing::debug!(api_base = %config.api_base, timeout_ms = cli.timeout_ms, "client config");
    let client = PubChemClient::from_config(config)?;

    commands::handle_lookup_commands(&cli, &client)
}
