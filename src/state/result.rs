// Test outcome structures

use crate::state::TestStatus;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single test's final result as reported by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    /// Enclosing group names, outermost first
    #[serde(default)]
    pub ancestor_titles: Vec<String>,
    pub title: String,
    pub status: TestStatus,
    /// Milliseconds
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}

impl TestOutcome {
    /// Create a passed outcome
    pub fn passed<I, S>(ancestors: I, title: impl Into<String>, duration: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ancestor_titles: ancestors.into_iter().map(Into::into).collect(),
            title: title.into(),
            status: TestStatus::Passed,
            duration: Some(duration),
            failure_message: None,
        }
    }

    /// Create a failed outcome
    pub fn failed<I, S>(
        ancestors: I,
        title: impl Into<String>,
        duration: u64,
        failure_message: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ancestor_titles: ancestors.into_iter().map(Into::into).collect(),
            title: title.into(),
            status: TestStatus::Failed,
            duration: Some(duration),
            failure_message: Some(failure_message.into()),
        }
    }

    /// Create a pending outcome; pending tests carry no duration
    pub fn pending<I, S>(ancestors: I, title: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ancestor_titles: ancestors.into_iter().map(Into::into).collect(),
            title: title.into(),
            status: TestStatus::Pending,
            duration: None,
            failure_message: None,
        }
    }

    /// Failure message, if present and non-empty
    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Outcomes of one completed test file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFileResult {
    #[serde(default)]
    pub test_results: Vec<TestOutcome>,
}

impl TestFileResult {
    pub fn new(test_results: Vec<TestOutcome>) -> Self {
        Self { test_results }
    }
}

/// Opaque descriptor of the test file an event concerns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFile {
    #[serde(default)]
    pub path: PathBuf,
}

impl TestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}
