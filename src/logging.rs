// Diagnostic logging - tracing event format and subscriber setup
// Report lines go to stdout through a LineSink; log events go to stderr

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let timestamp = Local::now().format("%H:%M:%S");
        let (emoji, level_str) = level_label(event.metadata().level());

        write!(writer, "{} {} [{}]: ", emoji, level_str, timestamp)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_label(level: &tracing::Level) -> (&'static str, &'static str) {
    match *level {
        tracing::Level::TRACE => ("🔬", "TRACE"),
        tracing::Level::DEBUG => ("🐛", "DEBUG"),
        tracing::Level::INFO => ("ℹ️ ", "INFO"),
        tracing::Level::WARN => ("⚠️ ", "WARN"),
        tracing::Level::ERROR => ("❌", "ERROR"),
    }
}

/// Default filter directive; `RUST_LOG` takes precedence when set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "specreport=debug,warn"
    } else {
        "specreport=warn"
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Returns `false` when a subscriber was already installed; that one keeps
/// receiving events.
pub fn init(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    match tracing_subscriber::fmt()
        .event_format(CustomFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Keeping existing tracing subscriber: {}", e);
            false
        }
    }
}
