//! Sink registry and dispatcher

use super::{
    clock::{Clock, SystemClock},
    config::{LoggerConfig, DEFAULT_MAX_SINKS},
    error::{LoggerError, Result},
    lock::{FnLock, LockGuard, LockHook, MutexLock},
    log_event::LogEvent,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::Sink,
};
use crate::sinks::{CallbackSink, ConsoleSink, FileSink};
use std::fmt;
use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A registered sink and the minimum level it fires for
struct SinkRegistration {
    sink: Box<dyn Sink>,
    min_level: LogLevel,
}

/// Logging facade: configuration, a bounded sink registry and the dispatcher.
///
/// Construct one at startup, register sinks through `&mut self`, then share it
/// (`&Logger` or `Arc<Logger>`) with the code that logs. Besides the
/// registered sinks there is always an implicit console sink, gated only by
/// the global minimum level and the quiet flag.
///
/// Logging from several threads at once is safe, but without a
/// [`LockHook`] the sink invocations of concurrent dispatches may interleave.
/// Install one with [`Logger::set_lock_hook`] or [`LoggerBuilder::locking`]
/// to serialize dispatches.
///
/// # Example
///
/// ```
/// use sinklog::prelude::*;
/// use sinklog::{error, info};
///
/// let mut logger = Logger::new();
/// logger.set_min_level(LogLevel::Info);
/// logger.add_sink(FileSink::new(Vec::new()), LogLevel::Warn).unwrap();
///
/// info!(logger, "console only");
/// error!(logger, "console and file: {}", 42);
/// ```
pub struct Logger {
    min_level: LogLevel,
    quiet: bool,
    lock: Option<Box<dyn LockHook>>,
    console: ConsoleSink,
    sinks: Vec<SinkRegistration>,
    max_sinks: usize,
    clock: Box<dyn Clock>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger with every level enabled, console on stderr and no sinks
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Trace,
            quiet: false,
            lock: None,
            console: ConsoleSink::new(),
            sinks: Vec::new(),
            max_sinks: DEFAULT_MAX_SINKS,
            clock: Box::new(SystemClock),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build a logger from a validated configuration
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.validate()?;
        LoggerBuilder::from_config(config).build()
    }

    /// Levels below `level` reach no sink at all, the console included
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Silence the implicit console sink. Registered sinks are unaffected.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Install a lock hook, replacing any previous one
    pub fn set_lock_hook(&mut self, hook: impl LockHook + 'static) {
        self.lock = Some(Box::new(hook));
    }

    /// Install a `(locked, context)` callback as the lock hook
    ///
    /// ```
    /// use sinklog::Logger;
    /// use parking_lot::Mutex;
    ///
    /// let mut logger = Logger::new();
    /// logger.set_lock_fn(
    ///     |locked, depth: &Mutex<i32>| *depth.lock() += if locked { 1 } else { -1 },
    ///     Mutex::new(0),
    /// );
    /// ```
    pub fn set_lock_fn<C, F>(&mut self, callback: F, context: C)
    where
        C: Send + Sync + 'static,
        F: Fn(bool, &C) + Send + Sync + 'static,
    {
        self.set_lock_hook(FnLock::new(callback, context));
    }

    /// Disable locking
    pub fn clear_lock_hook(&mut self) {
        self.lock = None;
    }

    pub fn has_lock_hook(&self) -> bool {
        self.lock.is_some()
    }

    /// Replace the implicit console sink, e.g. to write to stdout
    pub fn set_console(&mut self, console: ConsoleSink) {
        self.console = console;
    }

    /// Register a sink firing for events at `min_level` or above.
    ///
    /// Sinks run in registration order. Fails with
    /// [`LoggerError::CapacityExceeded`] once the registry is full, leaving the
    /// registered sinks untouched.
    pub fn add_sink(&mut self, sink: impl Sink + 'static, min_level: LogLevel) -> Result<()> {
        self.add_boxed_sink(Box::new(sink), min_level)
    }

    /// Register a callback sink with its own context
    pub fn add_callback<C, F>(
        &mut self,
        callback: F,
        context: C,
        min_level: LogLevel,
    ) -> Result<()>
    where
        C: Send + Sync + 'static,
        F: Fn(&LogEvent<'_>, &C) + Send + Sync + 'static,
    {
        self.add_sink(CallbackSink::new(callback, context), min_level)
    }

    /// Register the plain-text file sink writing to `writer`
    pub fn add_file_sink<W>(&mut self, writer: W, min_level: LogLevel) -> Result<()>
    where
        W: Write + Send + 'static,
    {
        self.add_sink(FileSink::new(writer), min_level)
    }

    fn add_boxed_sink(&mut self, sink: Box<dyn Sink>, min_level: LogLevel) -> Result<()> {
        if self.sinks.len() >= self.max_sinks {
            return Err(LoggerError::capacity_exceeded(self.max_sinks));
        }
        self.sinks.push(SinkRegistration { sink, min_level });
        Ok(())
    }

    /// Number of registered sinks, not counting the console
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn capacity(&self) -> usize {
        self.max_sinks
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Dispatch one event.
    ///
    /// Runs under the lock hook, if any. The console fires unless quiet, then
    /// every registered sink whose minimum level is met, in registration
    /// order. The timestamp is read at most once, and only if some sink fires.
    /// Sink errors and panics are counted in [`Logger::metrics`] and otherwise
    /// ignored.
    ///
    /// Usually called through the [`log!`](crate::log) family of macros.
    pub fn log(&self, level: LogLevel, file: &str, line: u32, args: fmt::Arguments<'_>) {
        let _guard = self.lock.as_deref().map(|hook| LockGuard::acquire(hook));

        if level < self.min_level {
            self.metrics.record_filtered();
            return;
        }

        let mut event: Option<LogEvent<'_>> = None;

        if !self.quiet {
            let event = event.get_or_insert_with(|| self.capture(level, file, line, args));
            self.emit(&self.console, event);
        }

        for registration in &self.sinks {
            if level < registration.min_level {
                continue;
            }
            let event = event.get_or_insert_with(|| self.capture(level, file, line, args));
            self.emit(registration.sink.as_ref(), event);
        }

        if event.is_some() {
            self.metrics.record_dispatched();
        } else {
            self.metrics.record_filtered();
        }
    }

    fn capture<'a>(
        &self,
        level: LogLevel,
        file: &'a str,
        line: u32,
        args: fmt::Arguments<'a>,
    ) -> LogEvent<'a> {
        LogEvent::new(level, self.clock.now(), file, line, args)
    }

    /// Invoke one sink with panic isolation
    fn emit(&self, sink: &dyn Sink, event: &LogEvent<'_>) {
        self.metrics.record_sink_invocation();
        let result = catch_unwind(AssertUnwindSafe(|| sink.emit(event)));
        if !matches!(result, Ok(Ok(()))) {
            self.metrics.record_sink_failure();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("quiet", &self.quiet)
            .field("locking", &self.lock.is_some())
            .field(
                "sinks",
                &self
                    .sinks
                    .iter()
                    .map(|registration| registration.sink.name())
                    .collect::<Vec<_>>(),
            )
            .field("max_sinks", &self.max_sinks)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use sinklog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .console(ConsoleSink::stdout().with_colors(false))
///     .sink(FileSink::new(Vec::new()), LogLevel::Error)
///     .locking()
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    quiet: bool,
    max_sinks: usize,
    console: Option<ConsoleSink>,
    clock: Option<Box<dyn Clock>>,
    lock: Option<Box<dyn LockHook>>,
    sinks: Vec<SinkRegistration>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Trace,
            quiet: false,
            max_sinks: DEFAULT_MAX_SINKS,
            console: None,
            clock: None,
            lock: None,
            sinks: Vec::new(),
        }
    }

    /// Start from a configuration; further calls override it
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new()
            .min_level(config.min_level)
            .quiet(config.quiet)
            .max_sinks(config.max_sinks)
            .console(ConsoleSink::from_config(config))
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Capacity of the sink registry (default 32)
    #[must_use = "builder methods return a new value"]
    pub fn max_sinks(mut self, max_sinks: usize) -> Self {
        self.max_sinks = max_sinks;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleSink) -> Self {
        self.console = Some(console);
        self
    }

    /// Replace the system clock, mostly useful in tests
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn lock_hook(mut self, hook: impl LockHook + 'static) -> Self {
        self.lock = Some(Box::new(hook));
        self
    }

    /// Serialize dispatches with a [`MutexLock`]
    #[must_use = "builder methods return a new value"]
    pub fn locking(self) -> Self {
        self.lock_hook(MutexLock::new())
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl Sink + 'static, min_level: LogLevel) -> Self {
        self.sinks.push(SinkRegistration {
            sink: Box::new(sink),
            min_level,
        });
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_sink<W>(self, writer: W, min_level: LogLevel) -> Self
    where
        W: Write + Send + 'static,
    {
        self.sink(FileSink::new(writer), min_level)
    }

    /// Build the Logger
    ///
    /// Fails if `max_sinks` is zero or more sinks were added than it allows.
    pub fn build(self) -> Result<Logger> {
        if self.max_sinks == 0 {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "max_sinks must be at least 1",
            ));
        }

        let mut logger = Logger {
            min_level: self.min_level,
            quiet: self.quiet,
            lock: self.lock,
            console: self.console.unwrap_or_default(),
            sinks: Vec::with_capacity(self.sinks.len()),
            max_sinks: self.max_sinks,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            metrics: LoggerMetrics::new(),
        };

        for registration in self.sinks {
            logger.add_boxed_sink(registration.sink, registration.min_level)?;
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
