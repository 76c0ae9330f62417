// Line sinks - where rendered report lines go

use std::io::{self, Write};
use std::sync::Mutex;

/// Receives one logical line per call.
///
/// A tree-mode block arrives as a single multi-line string; implementations
/// must write it in one piece.
pub trait LineSink: Send + Sync {
    fn emit(&self, line: &str) -> io::Result<()>;
}

/// Writes to the process stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()
    }
}

/// Writes to any `io::Write`
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("writer lock poisoned"))?;
        writeln!(writer, "{}", line)
    }
}

/// Keeps every emitted value in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, one entry per `emit` call
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Drop everything emitted so far
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl LineSink for MemorySink {
    fn emit(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .map_err(|_| io::Error::other("sink lock poisoned"))?
            .push(line.to_string());
        Ok(())
    }
}
