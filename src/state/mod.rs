// State module - test outcome and run summary data shapes
// These are read views handed over by the runner; the reporter never mutates them

pub mod result;
pub mod summary;

pub use result::{TestFile, TestFileResult, TestOutcome};
pub use summary::{RunStart, RunSummary};

use serde::{Deserialize, Serialize};

/// Test status
///
/// Runners may report statuses this crate does not know about (`skipped`,
/// `todo`, ...). Those are kept verbatim in [`TestStatus::Other`] instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestStatus {
    Passed,
    Failed,
    Pending,
    Other(String),
}

impl TestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Pending => "pending",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this status is one of the three recognized ones
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for TestStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "passed" => Self::Passed,
            "failed" => Self::Failed,
            "pending" => Self::Pending,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for TestStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<TestStatus> for String {
    fn from(status: TestStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_known_strings() {
        assert_eq!(TestStatus::from("passed"), TestStatus::Passed);
        assert_eq!(TestStatus::from("failed"), TestStatus::Failed);
        assert_eq!(TestStatus::from("pending"), TestStatus::Pending);
    }

    #[test]
    fn test_status_keeps_unknown_value() {
        let status = TestStatus::from("todo");
        assert_eq!(status, TestStatus::Other("todo".to_string()));
        assert!(!status.is_known());
        assert_eq!(status.to_string(), "todo");
    }

    #[test]
    fn test_status_deserializes_unknown_without_error() {
        let status: TestStatus = serde_json::from_str("\"disabled\"").unwrap();
        assert_eq!(status.as_str(), "disabled");
    }
}
