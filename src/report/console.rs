// Console reporter - mocha "spec" style output

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::{ReportFormat, ReporterConfig, ReporterOptions};
use crate::error::ConfigError;
use crate::state::{RunStart, RunSummary, TestFile, TestFileResult, TestOutcome, TestStatus};
use crate::time::{self, Clock, SystemClock};

use super::format::ResultFormatter;
use super::sink::LineSink;
use super::style::{Palette, Role};

/// Console reporter
pub struct SpecReporter {
    config: ReporterConfig,
    formatter: ResultFormatter,
    palette: Palette,
    sink: Arc<dyn LineSink>,
    clock: Arc<dyn Clock>,
}

impl SpecReporter {
    /// Create a reporter, validating `options` up front.
    ///
    /// Output is undecorated until [`SpecReporter::with_palette`] is used.
    pub fn new(
        options: Option<&ReporterOptions>,
        sink: Arc<dyn LineSink>,
    ) -> Result<Self, ConfigError> {
        let config = ReporterConfig::from_options(options)?;
        debug!("Report format: {}", config.report_format);

        Ok(Self {
            config,
            formatter: ResultFormatter::new(config.report_format, Palette::plain()),
            palette: Palette::plain(),
            sink,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_palette(self, palette: Palette) -> Self {
        Self {
            formatter: ResultFormatter::new(self.config.report_format, palette.clone()),
            palette,
            ..self
        }
    }

    pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
        Self { clock, ..self }
    }

    /// Effective configuration
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    pub fn report_format(&self) -> ReportFormat {
        self.config.report_format
    }

    /// Render one outcome without emitting it
    pub fn format_outcome(&self, outcome: &TestOutcome) -> String {
        self.formatter.format_line(
            &outcome.ancestor_titles,
            &outcome.status,
            &outcome.title,
            outcome.duration,
        )
    }

    fn emit(&self, line: &str) -> Result<()> {
        self.sink.emit(line).context("Failed to write report line")
    }

    fn emit_count(
        &self,
        status: TestStatus,
        role: Role,
        count: usize,
        label: &str,
    ) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let tail = self.palette.paint(role, &format!(" {} {}", count, label));
        self.emit(&format!("{}{}", self.formatter.glyph(&status), tail))
    }
}

impl fmt::Debug for SpecReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecReporter")
            .field("config", &self.config)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

impl super::Reporter for SpecReporter {
    fn on_run_start(&self, start: &RunStart) -> Result<()> {
        self.emit("")?;
        self.emit(&self.palette.paint(
            Role::Info,
            &format!("Found {} test suites", start.num_total_test_suites),
        ))
    }

    fn on_test_result(&self, test: &TestFile, result: &TestFileResult) -> Result<()> {
        debug!(
            "Reporting {} result(s) from {}",
            result.test_results.len(),
            test.path.display()
        );

        for outcome in &result.test_results {
            if !outcome.status.is_known() {
                warn!(
                    "Unrecognized status '{}' for '{}', reporting it as failed",
                    outcome.status, outcome.title
                );
            }
            self.emit(&self.format_outcome(outcome))?;
        }

        Ok(())
    }

    fn on_run_complete(&self, test: &TestFile, summary: &RunSummary) -> Result<()> {
        debug!("Run complete: {}", test.path.display());

        for message in summary.failure_messages() {
            self.emit(message)?;
        }

        let elapsed = time::format_elapsed(summary.start_time, self.clock.now());
        self.emit(&self.palette.paint(
            Role::Info,
            &format!("Ran {} tests in {}", summary.num_total_tests, elapsed),
        ))?;

        self.emit_count(
            TestStatus::Passed,
            Role::Passed,
            summary.num_passed_tests,
            "passing",
        )?;
        self.emit_count(
            TestStatus::Failed,
            Role::Failed,
            summary.num_failed_tests,
            "failing",
        )?;
        self.emit_count(
            TestStatus::Pending,
            Role::Pending,
            summary.num_pending_tests,
            "pending",
        )
    }
}
