//! Single-timer debounce for DOM recomputation.
//!
//! DESIGN
//! ======
//! One cancelable timer slot per instance: scheduling while a run is pending
//! replaces the pending timer, so a burst of triggers (e.g. one mutation
//! storm) collapses into a single run after the delay. Which run is still
//! live is decided by a [`RunGuard`] ticket, keeping the collapse semantics
//! independent of the browser timer and testable natively. Clones share the
//! slot and guard, which lets event-listener closures and their owning hook
//! coordinate without leaking timers.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

/// Ticket issuer deciding which scheduled run is live.
///
/// Each schedule issues a fresh ticket and invalidates every earlier one, so
/// a burst of N schedules leaves exactly one ticket that will pass
/// [`RunGuard::is_live`] when its timer fires.
#[derive(Clone, Debug, Default)]
pub struct RunGuard {
    current: Rc<Cell<u64>>,
}

impl RunGuard {
    /// Invalidate all earlier tickets and issue the ticket for a new run.
    pub fn issue(&self) -> u64 {
        let ticket = self.current.get().wrapping_add(1);
        self.current.set(ticket);
        ticket
    }

    /// Invalidate every outstanding ticket without issuing a new one to a
    /// run.
    pub fn invalidate(&self) {
        self.issue();
    }

    /// Whether the run holding `ticket` is still the one that should fire.
    pub fn is_live(&self, ticket: u64) -> bool {
        self.current.get() == ticket
    }
}

/// Debounced scheduler with a single pending-timer slot.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct Debounce {
    delay_ms: u32,
    guard: RunGuard,
    pending: Rc<RefCell<Option<Timeout>>>,
}

#[cfg(feature = "hydrate")]
impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            guard: RunGuard::default(),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Run `f` after the delay, superseding any previously scheduled run.
    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let ticket = self.guard.issue();
        let guard = self.guard.clone();
        let slot = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.delay_ms, move || {
            // Clear the slot before running so `f` may schedule again.
            slot.borrow_mut().take();
            if guard.is_live(ticket) {
                f();
            }
        });
        if let Some(previous) = self.pending.borrow_mut().replace(timeout) {
            previous.cancel();
        }
    }

    /// Drop the pending run, if any.
    pub fn cancel(&self) {
        self.guard.invalidate();
        if let Some(pending) = self.pending.borrow_mut().take() {
            pending.cancel();
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// Non-browser builds compile the timer away: scheduling only turns over the
/// guard so server rendering stays deterministic and callers need no cfg
/// noise.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone)]
pub struct Debounce {
    delay_ms: u32,
    guard: RunGuard,
}

#[cfg(not(feature = "hydrate"))]
impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            guard: RunGuard::default(),
        }
    }

    pub fn schedule(&self, _f: impl FnOnce() + 'static) {
        self.guard.issue();
    }

    pub fn cancel(&self) {
        self.guard.invalidate();
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}
