// Result formatting - renders one test outcome as inline or tree text

use crate::config::ReportFormat;
use crate::state::TestStatus;

use super::style::{Palette, Role};

/// Columns before the first line of every outcome
pub const BASE_OFFSET: usize = 4;

/// Extra columns per nesting level in tree mode
pub const INDENT_STEP: usize = 2;

/// Indentation of tree line `level` (0 is the outermost ancestor)
pub const fn indent_at(level: usize) -> usize {
    BASE_OFFSET + level * INDENT_STEP
}

/// Glyph for a status. Anything unrecognized is shown as a failure.
pub fn status_glyph(status: &TestStatus) -> &'static str {
    match status {
        TestStatus::Passed => "✔",
        TestStatus::Pending => "-",
        TestStatus::Failed | TestStatus::Other(_) => "✘",
    }
}

fn status_role(status: &TestStatus) -> Role {
    match status {
        TestStatus::Passed => Role::Passed,
        TestStatus::Pending => Role::Pending,
        TestStatus::Failed | TestStatus::Other(_) => Role::Failed,
    }
}

/// Formats outcomes according to the configured layout
#[derive(Debug, Clone)]
pub struct ResultFormatter {
    format: ReportFormat,
    palette: Palette,
}

impl ResultFormatter {
    pub fn new(format: ReportFormat, palette: Palette) -> Self {
        Self { format, palette }
    }

    /// Painted status glyph
    pub fn glyph(&self, status: &TestStatus) -> String {
        self.palette.paint(status_role(status), status_glyph(status))
    }

    /// Render one outcome.
    ///
    /// Inline mode yields a single line. Tree mode yields `depth + 1` lines
    /// joined by `\n`, line `i` indented by [`indent_at`]`(i)`.
    pub fn format_line(
        &self,
        ancestor_titles: &[String],
        status: &TestStatus,
        title: &str,
        duration: Option<u64>,
    ) -> String {
        let glyph = self.glyph(status);
        let title = self.palette.paint(Role::Title, title);
        let duration = self.duration(duration);

        match self.format {
            ReportFormat::Inline => {
                let mut line = format!("{}{} ", pad(indent_at(0)), glyph);
                if !ancestor_titles.is_empty() {
                    let head = format!("{} >", ancestor_titles.join(" > "));
                    line.push_str(&self.palette.paint(Role::Head, &head));
                    line.push(' ');
                }
                line.push_str(&title);
                line.push(' ');
                line.push_str(&duration);
                line
            }
            ReportFormat::Tree => {
                let depth = ancestor_titles.len();
                let mut lines: Vec<String> = ancestor_titles
                    .iter()
                    .enumerate()
                    .map(|(level, ancestor)| {
                        format!(
                            "{}{}",
                            pad(indent_at(level)),
                            self.palette.paint(Role::Head, ancestor)
                        )
                    })
                    .collect();
                lines.push(format!(
                    "{}{} {} {}",
                    pad(indent_at(depth)),
                    glyph,
                    title,
                    duration
                ));
                lines.join("\n")
            }
        }
    }

    fn duration(&self, duration: Option<u64>) -> String {
        let millis = duration.map(|d| d.to_string()).unwrap_or_default();
        self.palette.paint(Role::Duration, &format!("'({} ms)", millis))
    }
}

fn pad(width: usize) -> String {
    " ".repeat(width)
}
