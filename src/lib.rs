pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod report;
pub mod state;
pub mod time;

pub use config::{ReportFormat, ReporterConfig, ReporterOptions};
pub use error::ConfigError;
pub use report::{Reporter, SpecReporter};
