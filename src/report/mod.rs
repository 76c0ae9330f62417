// Report module - console rendering of runner events

pub mod console;
pub mod format;
pub mod sink;
pub mod style;

use crate::state::{RunStart, RunSummary, TestFile, TestFileResult};
use anyhow::Result;
pub use console::SpecReporter;
pub use format::{ResultFormatter, indent_at, status_glyph};
pub use sink::{LineSink, MemorySink, StdoutSink, WriterSink};
pub use style::{Palette, Role};

/// Reporter trait
///
/// The runner calls these strictly in sequence for one run: `on_run_start`
/// once, `on_test_result` once per completed test file, `on_run_complete`
/// once at the end.
pub trait Reporter: Send + Sync {
    /// Called before any test file runs
    fn on_run_start(&self, start: &RunStart) -> Result<()>;

    /// Called when a test file finishes
    fn on_test_result(&self, test: &TestFile, result: &TestFileResult) -> Result<()>;

    /// Called when the entire run finishes
    fn on_run_complete(&self, test: &TestFile, summary: &RunSummary) -> Result<()>;
}
