// CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

/// Render test runner events as spec-style console output
#[derive(Parser, Debug)]
#[command(name = "specreport")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render test runner events as spec-style console output", long_about = None)]
pub struct Cli {
    /// Newline-delimited JSON event file ("-" or omitted reads stdin)
    #[arg(value_name = "EVENTS")]
    pub events: Option<PathBuf>,

    /// Layout of each test line (inline, tree)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub report_format: Option<String>,

    /// Enable verbose debug output
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(short = 'c', long, default_value_t = false)]
    pub no_color: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Event file path, or `None` for stdin
    pub fn events_path(&self) -> Option<&PathBuf> {
        self.events
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}
