//! Console sink implementation

use crate::core::{
    ConsoleTarget, LocationStyle, LogEvent, LoggerConfig, Result, Sink, TimestampFormat,
};
use colored::Colorize;
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Human-readable sink for a terminal stream.
///
/// Every [`Logger`](crate::Logger) owns one as its implicit console output,
/// gated only by the global level and the quiet flag. Lines look like
///
/// ```text
/// 10:30:45 INFO  src/main.rs:12: server listening on 8080
/// ```
///
/// and the stream is flushed after every event.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    use_colors: bool,
    show_pid: bool,
    location: LocationStyle,
    timestamp_format: TimestampFormat,
}

impl ConsoleSink {
    /// Console sink writing to stderr
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn for_target(target: ConsoleTarget) -> Self {
        match target {
            ConsoleTarget::Stderr => Self::new(),
            ConsoleTarget::Stdout => Self::stdout(),
        }
    }

    /// Console-style output to an arbitrary writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            use_colors: true,
            show_pid: false,
            location: LocationStyle::Plain,
            timestamp_format: TimestampFormat::TimeOnly,
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        let location = match config.location_width {
            Some(width) => LocationStyle::Aligned(width),
            None => LocationStyle::Plain,
        };
        Self::for_target(config.console_target)
            .with_colors(config.colors)
            .with_pid(config.show_pid)
            .with_location_style(location)
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Prefix every line with the process id
    #[must_use]
    pub fn with_pid(mut self, show_pid: bool) -> Self {
        self.show_pid = show_pid;
        self
    }

    /// # Example
    ///
    /// ```
    /// use sinklog::{ConsoleSink, LocationStyle};
    ///
    /// let console = ConsoleSink::new().with_location_style(LocationStyle::aligned());
    /// ```
    #[must_use]
    pub fn with_location_style(mut self, location: LocationStyle) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Everything before the message: time, pid, level and location
    fn format_prefix(&self, event: &LogEvent<'_>) -> Result<String> {
        let mut prefix = self.timestamp_format.format(&event.timestamp)?;
        prefix.push(' ');

        if self.show_pid {
            let _ = write!(prefix, "[{:6}] ", std::process::id());
        }

        let level = format!("{:5}", event.level);
        let location = self.location.render(event.file, event.line);
        if self.use_colors {
            let _ = write!(
                prefix,
                "{} {} ",
                level.color(event.level.color()),
                format!("{}:", location).bright_black()
            );
        } else {
            let _ = write!(prefix, "{} {}: ", level, location);
        }
        Ok(prefix)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, event: &LogEvent<'_>) -> Result<()> {
        let prefix = self.format_prefix(event)?;

        let mut writer = self.writer.lock();
        writer.write_all(prefix.as_bytes())?;
        event.write_message(&mut **writer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
