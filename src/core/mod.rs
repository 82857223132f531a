//! Core logger types and traits

pub mod clock;
pub mod config;
pub mod error;
pub mod location;
pub mod lock;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use clock::{Clock, SystemClock};
pub use config::{ConsoleTarget, LoggerConfig, DEFAULT_MAX_SINKS};
pub use error::{LoggerError, Result};
pub use location::{LocationStyle, DEFAULT_LOCATION_WIDTH};
pub use lock::{FnLock, LockGuard, LockHook, MutexLock};
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
