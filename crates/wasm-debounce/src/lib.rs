//! WASM Debounce Utilities
//!
//! Coalesces bursts of calls into a single delayed invocation.
//! Only the most recent call within the delay window survives.
//!
//! Timers are pluggable: [`GlooTimer`] schedules on the browser event loop,
//! [`ManualTimer`] runs on a virtual clock for tests and headless use.

mod manual;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

pub use manual::{ManualHandle, ManualTimer};

/// Something that can run a callback after a delay.
///
/// Dropping the returned handle must cancel the callback if it has not
/// fired yet.
pub trait Timer {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timer backed by `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        // A zero delay still goes through the event loop (next tick)
        Timeout::new(delay_ms, callback)
    }
}

struct Inner<A, T: Timer> {
    timer: T,
    delay_ms: u32,
    callback: Rc<dyn Fn(A)>,
    pending: RefCell<Option<T::Handle>>,
}

/// Debounced wrapper around a callback
///
/// Every [`Debounced::call`] cancels the pending invocation and schedules a
/// new one `delay_ms` later with the latest arguments. Fire-and-forget: the
/// callback's result is never handed back to the caller.
pub struct Debounced<A, T: Timer> {
    inner: Rc<Inner<A, T>>,
}

impl<A, T: Timer> Clone for Debounced<A, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static, T: Timer> Debounced<A, T> {
    pub fn new(timer: T, delay_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                timer,
                delay_ms,
                callback: Rc::new(callback),
                pending: RefCell::new(None),
            }),
        }
    }

    /// Reschedule the callback with `args`, dropping any pending call
    pub fn call(&self, args: A) {
        let callback = Rc::clone(&self.inner.callback);
        let handle = self
            .inner
            .timer
            .schedule(self.inner.delay_ms, Box::new(move || callback(args)));

        // Old handle is dropped outside the RefCell borrow
        let previous = self.inner.pending.replace(Some(handle));
        if previous.is_some() {
            tracing::trace!("debounce: superseded pending call");
        }
        drop(previous);
    }

    /// Drop the pending call, if any
    pub fn cancel(&self) {
        let previous = self.inner.pending.take();
        drop(previous);
    }

    pub fn delay_ms(&self) -> u32 {
        self.inner.delay_ms
    }
}
