//! Loading splash progress bar.
//!
//! The bar fills in fixed steps on a fixed tick until full. The ticking task
//! stops as soon as the bar is unmounted.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use std::time::Duration;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::timer::{BrowserSleep, TimerGuard, run_after};

pub const PROGRESS_STEP: u8 = 2;
pub const PROGRESS_TICK: Duration = Duration::from_millis(50);

/// Next fill percentage, or `None` once the bar is full.
pub fn next_fill(filled: u8) -> Option<u8> {
    (filled < 100).then(|| filled.saturating_add(PROGRESS_STEP).min(100))
}

#[component]
pub fn ProgressBar() -> impl IntoView {
    let filled = RwSignal::new(0_u8);

    #[cfg(feature = "hydrate")]
    {
        let guard = TimerGuard::new();
        let task_guard = guard.clone();
        leptos::task::spawn_local(async move {
            while let Some(next) = filled.try_get_untracked().and_then(next_fill) {
                if !run_after(&BrowserSleep, PROGRESS_TICK, &task_guard, || filled.set(next)).await {
                    break;
                }
            }
        });
        on_cleanup(move || guard.cancel());
    }

    let percent = move || format!("{}%", filled.get());

    view! {
        <div class="progressScreen">
            <div class="progressBar">
                <div class="progressFill" style:width=percent></div>
                <span class="progressPercent">{percent}</span>
            </div>
            <div class="loadingText">"LOADING"</div>
        </div>
    }
}
