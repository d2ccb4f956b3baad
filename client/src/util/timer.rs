//! Cancellable delays for view-scoped timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages start timers (post-login delay, loading splash, progress ticks) from
//! spawned tasks. Each task holds a [`TimerGuard`]; the page cancels it in
//! `on_cleanup`, and a cancelled guard stops the callback from running
//! against a torn-down view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;

/// Source of asynchronous delays.
#[async_trait(?Send)]
pub trait Sleep {
    async fn sleep(&self, duration: Duration);
}

/// Browser timers via `gloo-timers`. Resolves immediately off-browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleep;

#[async_trait(?Send)]
impl Sleep for BrowserSleep {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
        }
    }
}

/// Shared cancellation flag for timers owned by one view.
#[derive(Clone, Debug, Default)]
pub struct TimerGuard {
    cancelled: Arc<AtomicBool>,
}

impl TimerGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Wait `delay`, then run `f` unless `guard` was cancelled meanwhile.
///
/// Returns whether `f` ran.
pub async fn run_after<T, F>(sleeper: &T, delay: Duration, guard: &TimerGuard, f: F) -> bool
where
    T: Sleep + ?Sized,
    F: FnOnce(),
{
    if guard.is_cancelled() {
        return false;
    }
    sleeper.sleep(delay).await;
    if guard.is_cancelled() {
        return false;
    }
    f();
    true
}
