// Configuration handling: reporter options validation and the config file

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

/// Layout used to render each test outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Full ancestor chain flattened onto one line
    Inline,
    /// One line per nesting level
    #[default]
    Tree,
}

impl ReportFormat {
    /// Accepted `reportFormat` values
    pub const VALID: &'static [&'static str] = &["inline", "tree"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Tree => "tree",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(Self::Inline),
            "tree" => Ok(Self::Tree),
            other => Err(ConfigError::InvalidReportFormat {
                value: other.to_string(),
                valid: Self::VALID,
            }),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options as supplied by the caller, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReporterOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_format: Option<String>,
}

impl ReporterOptions {
    pub fn with_report_format(report_format: impl Into<String>) -> Self {
        Self {
            report_format: Some(report_format.into()),
        }
    }
}

/// Validated reporter configuration, immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReporterConfig {
    pub report_format: ReportFormat,
}

impl ReporterConfig {
    /// Resolve caller options into a configuration.
    ///
    /// Missing options or a missing/empty `reportFormat` fall back to
    /// [`ReportFormat::Tree`]; anything outside [`ReportFormat::VALID`] is
    /// rejected.
    pub fn from_options(options: Option<&ReporterOptions>) -> Result<Self, ConfigError> {
        let Some(options) = options else {
            return Ok(Self::default());
        };

        match options.report_format.as_deref() {
            None | Some("") => Ok(Self::default()),
            Some(value) => Ok(Self {
                report_format: value.parse()?,
            }),
        }
    }
}

/// Configuration file contents (`.specreportrc.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub reporter: ReporterOptions,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

pub const CONFIG_FILE_NAME: &str = ".specreportrc.toml";

fn default_color() -> bool {
    true
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. ./.specreportrc.toml
        // 2. ~/.specreportrc.toml
        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
        }

        Self::load_first(&paths)
    }

    /// First existing file that parses; malformed files are skipped
    pub fn load_first(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if !path.exists() {
                continue;
            }
            tracing::debug!("Loading configuration from {}", path.display());
            match Self::load_from_file(path) {
                Some(config) => return Some(config),
                None => tracing::warn!("Skipping unusable configuration {}", path.display()),
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        match toml::from_str(content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring malformed configuration file: {}", e);
                None
            }
        }
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }

    /// Merge a command-line `--report-format` over the file's reporter options
    pub fn reporter_options(&self, cli_format: Option<&str>) -> ReporterOptions {
        match cli_format {
            Some(format) => ReporterOptions::with_report_format(format),
            None => self.reporter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_options() {
        let config = ReporterConfig::from_options(None).unwrap();
        assert_eq!(config.report_format, ReportFormat::Tree);
    }

    #[test]
    fn test_defaults_when_format_omitted() {
        let options = ReporterOptions::default();
        let config = ReporterConfig::from_options(Some(&options)).unwrap();
        assert_eq!(config.report_format, ReportFormat::Tree);
    }

    #[test]
    fn test_empty_format_falls_back_to_tree() {
        let options = ReporterOptions::with_report_format("");
        let config = ReporterConfig::from_options(Some(&options)).unwrap();
        assert_eq!(config.report_format, ReportFormat::Tree);
    }

    #[test]
    fn test_valid_formats_round_trip() {
        for name in ReportFormat::VALID {
            let options = ReporterOptions::with_report_format(*name);
            let config = ReporterConfig::from_options(Some(&options)).unwrap();
            assert_eq!(config.report_format.as_str(), *name);
        }
    }

    #[test]
    fn test_invalid_format_rejected() {
        let options = ReporterOptions::with_report_format("Tree");
        let err = ReporterConfig::from_options(Some(&options)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'Tree'"));
        assert!(message.contains("'inline'"));
        assert!(message.contains("'tree'"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[reporter]
reportFormat = "inline"

[output]
color = false
"#;

        let config = Config::parse(toml).expect("Failed to parse config");
        assert_eq!(config.reporter.report_format.as_deref(), Some("inline"));
        assert!(!config.output.color);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::parse("").expect("Failed to parse config");
        assert!(config.reporter.report_format.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_malformed_file_falls_through_to_next() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[reporter\nreportFormat = ").unwrap();
        std::fs::write(&good, "[reporter]\nreportFormat = \"inline\"\n").unwrap();

        let config = Config::load_first(&[dir.path().join("absent.toml"), broken, good])
            .expect("second file should load");
        assert_eq!(config.reporter.report_format.as_deref(), Some("inline"));
    }

    #[test]
    fn test_load_first_none_when_nothing_usable() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "not = [toml").unwrap();

        assert!(Config::load_first(&[broken]).is_none());
    }

    #[test]
    fn test_cli_format_overrides_file() {
        let config = Config::parse("[reporter]\nreportFormat = \"inline\"\n").unwrap();
        assert_eq!(
            config.reporter_options(Some("tree")).report_format.as_deref(),
            Some("tree")
        );
        assert_eq!(
            config.reporter_options(None).report_format.as_deref(),
            Some("inline")
        );
    }
}
