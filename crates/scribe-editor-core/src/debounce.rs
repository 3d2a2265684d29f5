//! Debounced actions.
//!
//! A `Debouncer` delays its action until a quiet period of `delay_ms` has
//! passed with no further `trigger` calls. Every trigger cancels the
//! pending run and schedules a fresh one. Timing comes from a `Scheduler`,
//! so the same logic serves autosave, search submission and tests.

use std::cell::RefCell;
use std::rc::Rc;

/// Something that can run a task after a delay.
pub trait Scheduler {
    /// Handle to a scheduled task. Dropping it must cancel the task if it
    /// hasn't run yet.
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    action: Rc<dyn Fn()>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Restart the quiet period.
    pub fn trigger(&self) {
        let action = Rc::clone(&self.action);
        let handle = self
            .scheduler
            .schedule(self.delay_ms, Box::new(move || action()));
        // Replacing the old handle drops it, which cancels the earlier run.
        let previous = self.pending.replace(Some(handle));
        drop(previous);
    }

    /// Drop any pending run without executing it.
    pub fn cancel(&self) {
        self.pending.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Task {
        due: u64,
        run: Option<Box<dyn FnOnce()>>,
        cancelled: Rc<Cell<bool>>,
    }

    /// Scheduler driven by an explicit clock.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        now: Rc<Cell<u64>>,
        tasks: Rc<RefCell<Vec<Task>>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks.borrow_mut().push(Task {
                due: self.now.get() + u64::from(delay_ms),
                run: Some(task),
                cancelled: Rc::clone(&cancelled),
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u64) {
            let now = self.now.get() + ms;
            self.now.set(now);

            let due: Vec<Box<dyn FnOnce()>> = {
                let mut tasks = self.tasks.borrow_mut();
                tasks.sort_by_key(|t| t.due);
                let mut ready = Vec::new();
                tasks.retain_mut(|t| {
                    if t.due > now {
                        return true;
                    }
                    if !t.cancelled.get() {
                        if let Some(run) = t.run.take() {
                            ready.push(run);
                        }
                    }
                    false
                });
                ready
            };

            for run in due {
                run();
            }
        }
    }

    fn counting(scheduler: &ManualScheduler, delay: u32) -> (Debouncer<ManualScheduler>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let debouncer = Debouncer::new(scheduler.clone(), delay, move || c.set(c.get() + 1));
        (debouncer, count)
    }

    #[test]
    fn test_fires_after_quiet_period() {
        let scheduler = ManualScheduler::default();
        let (debouncer, count) = counting(&scheduler, 2000);

        debouncer.trigger();
        scheduler.advance(1999);
        assert_eq!(count.get(), 0);
        scheduler.advance(1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_retrigger_resets_window() {
        let scheduler = ManualScheduler::default();
        let (debouncer, count) = counting(&scheduler, 2000);

        debouncer.trigger();
        scheduler.advance(1500);
        debouncer.trigger();
        scheduler.advance(1500);
        assert_eq!(count.get(), 0, "earlier run should have been cancelled");
        scheduler.advance(500);
        assert_eq!(count.get(), 1);
        scheduler.advance(10_000);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cancel_drops_pending_run() {
        let scheduler = ManualScheduler::default();
        let (debouncer, count) = counting(&scheduler, 500);

        debouncer.trigger();
        debouncer.cancel();
        scheduler.advance(1000);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_fires_again_after_new_trigger() {
        let scheduler = ManualScheduler::default();
        let (debouncer, count) = counting(&scheduler, 500);

        debouncer.trigger();
        scheduler.advance(500);
        debouncer.trigger();
        scheduler.advance(500);
        assert_eq!(count.get(), 2);
    }
}
