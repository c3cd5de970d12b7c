//! Runeseed command-line entry point.

use std::error::Error;

use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod error;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout carries only the seed and draws.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = config::CliConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    app::run(&config, &mut std::io::stdout().lock())?;
    Ok(())
}
