use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

type Job = Box<dyn FnOnce()>;

/// Timer-free bookkeeping behind [`Throttle`].
///
/// The first call in a quiet period runs at once and opens a window. Calls
/// inside the window are parked, each replacing the last, and the parked one
/// runs when the window closes so the final state is never lost.
#[derive(Default)]
pub struct ThrottleWindow {
    open: bool,
    trailing: Option<Job>,
}

impl ThrottleWindow {
    /// Returns the job to run now, or `None` if it was parked.
    pub fn call(&mut self, job: Job) -> Option<Job> {
        if self.open {
            self.trailing = Some(job);
            None
        } else {
            self.open = true;
            Some(job)
        }
    }

    /// The window elapsed. A parked job is handed back and keeps the window
    /// open for another round; otherwise the window closes.
    pub fn expire(&mut self) -> Option<Job> {
        let trailing = self.trailing.take();
        self.open = trailing.is_some();
        trailing
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

struct ThrottleInner {
    limit_ms: u32,
    window: RefCell<ThrottleWindow>,
    timer: RefCell<Option<Timeout>>,
}

/// Leading and trailing edge throttle on a `Timeout`.
#[derive(Clone)]
pub struct Throttle {
    inner: Rc<ThrottleInner>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            inner: Rc::new(ThrottleInner {
                limit_ms,
                window: RefCell::new(ThrottleWindow::default()),
                timer: RefCell::new(None),
            }),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let run_now = self.inner.window.borrow_mut().call(Box::new(f));
        if let Some(job) = run_now {
            job();
            start_window(&self.inner);
        }
    }
}

fn start_window(inner: &Rc<ThrottleInner>) {
    let weak: Weak<ThrottleInner> = Rc::downgrade(inner);
    let timeout = Timeout::new(inner.limit_ms, move || {
        let Some(inner) = weak.upgrade() else { return };
        let trailing = inner.window.borrow_mut().expire();
        if let Some(job) = trailing {
            job();
            start_window(&inner);
        }
    });
    *inner.timer.borrow_mut() = Some(timeout);
}

/// Timer-free bookkeeping behind [`Debounce`]: only the newest job may fire.
#[derive(Default)]
pub struct DebounceSlot {
    generation: u64,
    pending: Option<Job>,
}

impl DebounceSlot {
    /// Replaces any pending job and returns the ticket its timer must present.
    pub fn push(&mut self, job: Job) -> u64 {
        self.generation += 1;
        self.pending = Some(job);
        self.generation
    }

    /// Hands the job back only if `ticket` is still the newest.
    pub fn fire(&mut self, ticket: u64) -> Option<Job> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

struct DebounceInner {
    wait_ms: u32,
    slot: RefCell<DebounceSlot>,
    timer: RefCell<Option<Timeout>>,
}

/// Runs only the last call, `wait_ms` after calls stop arriving.
#[derive(Clone)]
pub struct Debounce {
    inner: Rc<DebounceInner>,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            inner: Rc::new(DebounceInner {
                wait_ms,
                slot: RefCell::new(DebounceSlot::default()),
                timer: RefCell::new(None),
            }),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let ticket = self.inner.slot.borrow_mut().push(Box::new(f));
        let weak = Rc::downgrade(&self.inner);
        // Replacing the Timeout cancels the previous one.
        *self.inner.timer.borrow_mut() = Some(Timeout::new(self.inner.wait_ms, move || {
            let Some(inner) = weak.upgrade() else { return };
            let job = inner.slot.borrow_mut().fire(ticket);
            if let Some(job) = job {
                job();
            }
        }));
    }

    pub fn cancel(&self) {
        self.inner.timer.borrow_mut().take();
        self.inner.slot.borrow_mut().clear();
    }
}
