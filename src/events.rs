// Runner events - the lifecycle calls in serialized form
// One JSON object per line, tagged by "event"

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

use crate::report::Reporter;
use crate::state::{RunStart, RunSummary, TestFile, TestFileResult};

/// A single runner event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum RunnerEvent {
    RunStart(RunStart),
    TestResult(TestResultEvent),
    RunComplete(RunCompleteEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResultEvent {
    #[serde(default)]
    pub test: TestFile,
    #[serde(flatten)]
    pub result: TestFileResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCompleteEvent {
    #[serde(default)]
    pub test: TestFile,
    #[serde(flatten)]
    pub summary: RunSummary,
}

impl RunnerEvent {
    /// Hand the event to the matching reporter callback
    pub fn dispatch(&self, reporter: &dyn Reporter) -> Result<()> {
        match self {
            Self::RunStart(start) => reporter.on_run_start(start),
            Self::TestResult(event) => reporter.on_test_result(&event.test, &event.result),
            Self::RunComplete(event) => reporter.on_run_complete(&event.test, &event.summary),
        }
    }
}

/// Parse one line; `None` for blank lines
fn parse_line(line: &str, line_no: usize) -> Result<Option<RunnerEvent>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let event = serde_json::from_str(line)
        .with_context(|| format!("Invalid runner event on line {}", line_no))?;
    Ok(Some(event))
}

/// Parse newline-delimited events, skipping blank lines
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<RunnerEvent>> {
    let mut events = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read event line {}", line_no))?;
        if let Some(event) = parse_line(&line, line_no)? {
            events.push(event);
        }
    }

    Ok(events)
}

/// Feed events to the reporter as each line arrives; returns how many were
/// replayed. Events before a bad or unreadable line have already been
/// rendered when the error is returned.
pub fn replay<R: BufRead>(reader: R, reporter: &dyn Reporter) -> Result<usize> {
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read event line {}", line_no))?;
        if let Some(event) = parse_line(&line, line_no)? {
            event.dispatch(reporter)?;
            count += 1;
        }
    }

    tracing::debug!("Replayed {} event(s)", count);
    Ok(count)
}
