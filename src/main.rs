// Main entry point for specreport

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use specreport::cli::Cli;
use specreport::commands;
use specreport::config::Config;
use specreport::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    info!("Starting specreport v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from file (if exists)
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path).with_context(|| {
            format!("Failed to load configuration file: {}", path.display())
        })?,
        None => Config::load().unwrap_or_default(),
    };

    commands::run_replay(&cli, &config)
}
