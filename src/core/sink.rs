//! Sink trait for log output destinations

use super::{error::Result, log_event::LogEvent};

/// A destination for log events.
///
/// Sinks receive events by shared reference and do their own formatting and
/// I/O. An error returned from [`Sink::emit`] is counted by the logger and then
/// dropped; it never stops the remaining sinks of the same dispatch.
pub trait Sink: Send + Sync {
    fn emit(&self, event: &LogEvent<'_>) -> Result<()>;

    fn name(&self) -> &str {
        "sink"
    }
}

impl<T: Sink + ?Sized> Sink for std::sync::Arc<T> {
    fn emit(&self, event: &LogEvent<'_>) -> Result<()> {
        (**self).emit(event)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
