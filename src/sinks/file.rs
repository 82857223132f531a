//! File sink implementation

use crate::core::{LogEvent, Result, Sink, TimestampFormat};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Plain-text sink for files and other non-terminal streams.
///
/// Lines carry the full local date, no color codes, and each event is flushed
/// before `emit` returns:
///
/// ```text
/// 2025-01-08 10:30:45 WARN  src/db.rs:88: pool exhausted
/// ```
///
/// The sink owns its writer. To keep using a file elsewhere, hand over a
/// `try_clone()` of it.
pub struct FileSink<W: Write + Send = File> {
    writer: Mutex<W>,
    timestamp_format: TimestampFormat,
}

impl FileSink<File> {
    /// Open `path` for appending, creating it if needed
    ///
    /// ```no_run
    /// use sinklog::{FileSink, LogLevel, Logger};
    ///
    /// let mut logger = Logger::new();
    /// logger.add_sink(FileSink::open("/var/log/app.log")?, LogLevel::Info)?;
    /// # Ok::<(), sinklog::LoggerError>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> FileSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamp_format: TimestampFormat::DateTime,
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for FileSink<W> {
    fn emit(&self, event: &LogEvent<'_>) -> Result<()> {
        let prefix = format!(
            "{} {:<5} {}:{}: ",
            self.timestamp_format.format(&event.timestamp)?,
            event.level,
            event.file,
            event.line
        );

        let mut writer = self.writer.lock();
        writer.write_all(prefix.as_bytes())?;
        event.write_message(&mut *writer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::{Local, TimeZone};

    fn emit<W: Write + Send>(sink: &FileSink<W>, level: LogLevel) {
        let timestamp = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .earliest()
            .unwrap();
        sink.emit(&LogEvent::new(
            level,
            timestamp,
            "src/db.rs",
            88,
            format_args!("pool exhausted after {} connections", 16),
        ))
        .unwrap();
    }

    #[test]
    fn test_line_layout() {
        let sink = FileSink::new(Vec::new());
        emit(&sink, LogLevel::Warn);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "2025-01-08 10:30:45 WARN  src/db.rs:88: pool exhausted after 16 connections\n"
        );
    }

    #[test]
    fn test_no_color_codes() {
        let sink = FileSink::new(Vec::new());
        emit(&sink, LogLevel::Error);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_custom_timestamp_format() {
        let sink = FileSink::new(Vec::new()).with_timestamp_format(TimestampFormat::TimeOnly);
        emit(&sink, LogLevel::Info);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("10:30:45 INFO  src/db.rs:88: "));
    }

    #[test]
    fn test_open_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        emit(&FileSink::open(&path).unwrap(), LogLevel::Info);
        emit(&FileSink::open(&path).unwrap(), LogLevel::Fatal);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO "));
        assert!(lines[1].contains("FATAL"));
    }
}
