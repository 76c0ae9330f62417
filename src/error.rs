// Typed errors raised by the reporter library

use thiserror::Error;

/// Reporter configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("reportFormat '{value}' is invalid. Must be one of [{}]", quoted_list(.valid))]
    InvalidReportFormat {
        value: String,
        valid: &'static [&'static str],
    },
}

fn quoted_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", v))
        .collect::<Vec<_>>()
        .join(", ")
}
