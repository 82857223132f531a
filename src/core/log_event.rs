//! Log event passed to every sink of a dispatch

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt;
use std::io;

/// One logical log event.
///
/// Built once per dispatch, after filtering, and handed by reference to every
/// sink that fires for it. The message is kept as unrendered
/// [`fmt::Arguments`]; each sink decides whether and how to render it.
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    pub level: LogLevel,
    /// Captured once per dispatch and shared by all sinks
    pub timestamp: DateTime<Local>,
    pub file: &'a str,
    pub line: u32,
    pub args: fmt::Arguments<'a>,
}

impl<'a> LogEvent<'a> {
    pub fn new(
        level: LogLevel,
        timestamp: DateTime<Local>,
        file: &'a str,
        line: u32,
        args: fmt::Arguments<'a>,
    ) -> Self {
        Self {
            level,
            timestamp,
            file,
            line,
            args,
        }
    }

    /// Render the message template with its arguments.
    pub fn message(&self) -> String {
        match self.args.as_str() {
            Some(s) => s.to_owned(),
            None => fmt::format(self.args),
        }
    }

    /// Stream the rendered message into `writer` without an intermediate `String`.
    pub fn write_message<W: io::Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_fmt(self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(event: LogEvent<'_>) -> String {
        event.message()
    }

    #[test]
    fn test_message_renders_arguments() {
        let user = "alice";
        let message = render(LogEvent::new(
            LogLevel::Info,
            Local::now(),
            "src/main.rs",
            7,
            format_args!("user {} logged in after {} tries", user, 3),
        ));
        assert_eq!(message, "user alice logged in after 3 tries");
    }

    #[test]
    fn test_message_without_arguments() {
        let message = render(LogEvent::new(
            LogLevel::Debug,
            Local::now(),
            "src/main.rs",
            9,
            format_args!("plain text"),
        ));
        assert_eq!(message, "plain text");
    }

    #[test]
    fn test_write_message() {
        let mut buf = Vec::new();
        LogEvent::new(
            LogLevel::Warn,
            Local::now(),
            "lib.rs",
            1,
            format_args!("{:>4}", 42),
        )
        .write_message(&mut buf)
        .unwrap();
        assert_eq!(buf, b"  42");
    }
}
