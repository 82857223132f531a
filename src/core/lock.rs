//! Optional mutual exclusion around each dispatch
//!
//! The logger does not pick a threading model. When several threads log
//! through the same [`Logger`](super::Logger), install a [`LockHook`] so that
//! one dispatch (filtering plus every sink invocation) runs at a time.

use parking_lot::{Condvar, Mutex};

/// Caller-supplied mutual exclusion bracketing a dispatch.
pub trait LockHook: Send + Sync {
    fn acquire(&self);
    fn release(&self);
}

impl<T: LockHook + ?Sized> LockHook for std::sync::Arc<T> {
    fn acquire(&self) {
        (**self).acquire();
    }

    fn release(&self) {
        (**self).release();
    }
}

/// Scoped guard holding a [`LockHook`] for the duration of one dispatch.
///
/// Releases on drop, so a panicking sink cannot leave the hook held.
pub struct LockGuard<'a> {
    hook: &'a dyn LockHook,
}

impl<'a> LockGuard<'a> {
    pub fn acquire(hook: &'a dyn LockHook) -> Self {
        hook.acquire();
        Self { hook }
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.hook.release();
    }
}

/// Adapts a `(locked, context)` callback into a [`LockHook`].
///
/// The callback is invoked with `true` before a dispatch and `false` after it.
pub struct FnLock<C, F> {
    callback: F,
    context: C,
}

impl<C, F> FnLock<C, F>
where
    C: Send + Sync,
    F: Fn(bool, &C) + Send + Sync,
{
    pub fn new(callback: F, context: C) -> Self {
        Self { callback, context }
    }
}

impl<C, F> LockHook for FnLock<C, F>
where
    C: Send + Sync,
    F: Fn(bool, &C) + Send + Sync,
{
    fn acquire(&self) {
        (self.callback)(true, &self.context);
    }

    fn release(&self) {
        (self.callback)(false, &self.context);
    }
}

/// Ready-made hook backed by a `parking_lot` mutex and condition variable.
///
/// Unlike a plain mutex guard, acquire and release are separate calls, which
/// is what the hook interface needs.
#[derive(Debug, Default)]
pub struct MutexLock {
    locked: Mutex<bool>,
    available: Condvar,
}

impl MutexLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a dispatch currently holds the lock.
    pub fn is_locked(&self) -> bool {
        *self.locked.lock()
    }
}

impl LockHook for MutexLock {
    fn acquire(&self) {
        let mut locked = self.locked.lock();
        while *locked {
            self.available.wait(&mut locked);
        }
        *locked = true;
    }

    fn release(&self) {
        let mut locked = self.locked.lock();
        *locked = false;
        self.available.notify_one();
    }
}
