//! `Scheduler` on top of `setTimeout`.

use gloo_timers::callback::Timeout;

use scribe_editor_core::Scheduler;

/// Schedules tasks with `gloo-timers`. Dropping the returned `Timeout`
/// clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
