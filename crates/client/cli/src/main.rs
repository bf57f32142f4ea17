//! Command-line client entry point.
mod args;
mod commands;
mod config;
mod presentation;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use args::Cli;
use commands::CliApp;
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging();

    let config = CliConfig::from_env().with_overrides(cli.data_dir, cli.save_dir);
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        save_dir = %config.save_dir.display(),
        "configuration resolved"
    );

    let app = CliApp::new(&config)?;
    let output = app.run(cli.command)?;
    std::io::stdout().write_all(output.as_bytes())?;
    Ok(())
}

/// Logs go to stderr so command output stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
