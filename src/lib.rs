//! # sinklog
//!
//! A small, embeddable logging facade. Application code emits leveled,
//! formatted messages; a [`Logger`] routes each one to an implicit console
//! sink and to any number of registered sinks, each with its own minimum level.
//!
//! ## Features
//!
//! - **Lazy dispatch**: filtering happens before anything is built; the
//!   timestamp is read once per event and only if a sink will fire
//! - **Unrendered messages**: sinks get `fmt::Arguments` and format on demand
//! - **Bounded registry**: up to 32 sinks by default, in registration order
//! - **Opt-in locking**: serialize dispatches across threads with a lock hook
//!
//! ```
//! use sinklog::prelude::*;
//! use sinklog::{info, warn};
//!
//! let mut logger = Logger::builder()
//!     .min_level(LogLevel::Info)
//!     .locking()
//!     .build()?;
//! logger.add_file_sink(std::io::sink(), LogLevel::Warn)?;
//!
//! info!(logger, "listening on port {}", 8080);
//! warn!(logger, "{} connections pending", 12);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Clock, ConsoleTarget, LocationStyle, LockHook, LogEvent, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MutexLock, Result, Sink,
        TimestampFormat,
    };
    pub use crate::sinks::{CallbackSink, ConsoleSink, FileSink};
}

pub use crate::core::{
    Clock, ConsoleTarget, FnLock, LocationStyle, LockGuard, LockHook, LogEvent, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MutexLock, Result, Sink, SystemClock,
    TimestampFormat, DEFAULT_LOCATION_WIDTH, DEFAULT_MAX_SINKS,
};
pub use crate::sinks::{CallbackSink, ConsoleSink, FileSink};
