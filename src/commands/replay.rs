// Replay command - render an event stream through the spec reporter

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::sync::Arc;
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::events;
use crate::report::{LineSink, Palette, SpecReporter, StdoutSink};

/// Build the reporter from CLI flags and the config file, then replay events
pub fn run_replay(cli: &Cli, config: &Config) -> Result<()> {
    let reporter = build_reporter(cli, config, Arc::new(StdoutSink))?;

    let count = match cli.events_path() {
        Some(path) => {
            info!("Reading events from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open event file: {}", path.display()))?;
            events::replay(BufReader::new(file), &reporter)?
        }
        None => {
            info!("Reading events from stdin");
            events::replay(io::stdin().lock(), &reporter)?
        }
    };

    info!("Rendered {} event(s)", count);
    Ok(())
}

/// Command-line flags win over the config file
pub fn build_reporter(
    cli: &Cli,
    config: &Config,
    sink: Arc<dyn LineSink>,
) -> Result<SpecReporter> {
    let options = config.reporter_options(cli.report_format.as_deref());
    let reporter = SpecReporter::new(Some(&options), sink)?;

    let palette = if cli.no_color || !config.output.color {
        Palette::plain()
    } else {
        Palette::styled()
    };

    Ok(reporter.with_palette(palette))
}
