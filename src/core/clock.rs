//! Wall-clock source for event timestamps

use chrono::{DateTime, Local};

/// Source of the timestamp captured once per dispatch.
///
/// The logger only calls [`Clock::now`] when at least one sink is about to
/// fire, so a fully filtered-out message never touches the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}
