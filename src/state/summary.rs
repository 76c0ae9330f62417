// Run-level payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::TestOutcome;

/// Payload of the run start event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStart {
    pub num_total_test_suites: usize,
}

/// Aggregate results handed over at run completion
///
/// `num_total_tests` is taken as given; runners do not always make it the
/// sum of the per-status counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    #[serde(default)]
    pub num_total_tests: usize,
    #[serde(default)]
    pub num_passed_tests: usize,
    #[serde(default)]
    pub num_failed_tests: usize,
    #[serde(default)]
    pub num_pending_tests: usize,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub test_results: Vec<TestOutcome>,
}

impl RunSummary {
    /// Non-empty failure messages, in outcome order
    pub fn failure_messages(&self) -> impl Iterator<Item = &str> {
        self.test_results
            .iter()
            .filter_map(TestOutcome::failure_message)
    }
}
