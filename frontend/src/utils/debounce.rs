//! Cancellable delayed tasks and a trailing-edge debouncer built on them.
//!
//! The browser implementation schedules through `setTimeout`; tests provide
//! their own [`Scheduler`] through Leptos context so timing can be driven
//! without a real clock.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

pub trait Scheduler {
    /// Runs `task` once after `delay_ms`, unless the returned handle is
    /// cancelled first.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// Keeps a scheduled task alive until it fires or is cancelled.
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        // Dropping a gloo Timeout clears it, so the handle owns it.
        let timeout = Timeout::new(delay_ms, task);
        TaskHandle::new(move || {
            timeout.cancel();
        })
    }
}

#[derive(Clone)]
pub struct SchedulerContext(pub Rc<dyn Scheduler>);

pub fn provide_scheduler(scheduler: impl Scheduler + 'static) {
    provide_context(SchedulerContext(Rc::new(scheduler)));
}

pub fn use_scheduler() -> Rc<dyn Scheduler> {
    use_context::<SchedulerContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Rc::new(BrowserScheduler))
}

/// Trailing-edge debounce: every call replaces the pending task, which runs
/// once `delay_ms` have passed without another call. No leading edge, no
/// max wait.
#[derive(Clone)]
pub struct Debouncer {
    scheduler: Rc<dyn Scheduler>,
    delay_ms: u32,
    pending: Rc<RefCell<Option<TaskHandle>>>,
    armed: Rc<Cell<bool>>,
}

impl Debouncer {
    pub fn new(scheduler: Rc<dyn Scheduler>, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
            armed: Rc::new(Cell::new(false)),
        }
    }

    pub fn call(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        let armed = Rc::clone(&self.armed);
        armed.set(true);
        // The handle stays in `pending` after firing; tearing down a timer
        // from inside its own callback is not allowed in the browser.
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                armed.set(false);
                task();
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drops the pending task without running it.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.cancel();
        }
        self.armed.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}
