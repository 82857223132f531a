//! Callback sink: a function paired with its own context

use crate::core::{LogEvent, Result, Sink};

/// Adapts a `(event, context)` callback into a [`Sink`].
///
/// The same event is handed to every sink of a dispatch; the context is what
/// differs per sink. It is typically a handle shared with the registering
/// code, e.g. an `Arc<Mutex<Vec<String>>>` collecting messages.
///
/// ```
/// use sinklog::{CallbackSink, LogLevel, Logger};
/// use parking_lot::Mutex;
/// use std::sync::Arc;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let mut logger = Logger::builder().quiet(true).build().unwrap();
/// logger
///     .add_callback(
///         |event, seen: &Arc<Mutex<Vec<String>>>| seen.lock().push(event.message()),
///         Arc::clone(&seen),
///         LogLevel::Warn,
///     )
///     .unwrap();
///
/// sinklog::warn!(logger, "disk {}% full", 91);
/// assert_eq!(seen.lock().as_slice(), ["disk 91% full"]);
/// ```
pub struct CallbackSink<C, F> {
    callback: F,
    context: C,
}

impl<C, F> CallbackSink<C, F>
where
    C: Send + Sync,
    F: Fn(&LogEvent<'_>, &C) + Send + Sync,
{
    pub fn new(callback: F, context: C) -> Self {
        Self { callback, context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }
}

impl<C, F> Sink for CallbackSink<C, F>
where
    C: Send + Sync,
    F: Fn(&LogEvent<'_>, &C) + Send + Sync,
{
    fn emit(&self, event: &LogEvent<'_>) -> Result<()> {
        (self.callback)(event, &self.context);
        Ok(())
    }

    fn name(&self) -> &str {
        "callback"
    }
}
