//! Virtual-clock timer
//!
//! Callbacks only run when the clock is advanced explicitly.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::Timer;

struct Scheduled {
    id: u64,
    due: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    pending: Vec<Scheduled>,
}

/// Deterministic timer driven by [`ManualTimer::advance`]
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its callback when dropped
pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        let Some(clock) = self.clock.upgrade() else {
            return;
        };
        let removed = {
            let mut clock = clock.borrow_mut();
            clock
                .pending
                .iter()
                .position(|s| s.id == self.id)
                .map(|idx| clock.pending.remove(idx))
        };
        // Captured state may own other handles; drop it after the borrow ends
        drop(removed);
    }
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Number of callbacks waiting to fire
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward, firing due callbacks in order
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let idx = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due <= target)
                    .min_by_key(|(_, s)| (s.due, s.id))
                    .map(|(idx, _)| idx);
                match idx {
                    Some(idx) => {
                        let scheduled = clock.pending.remove(idx);
                        clock.now = scheduled.due;
                        Some(scheduled)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };

            match next {
                Some(scheduled) => (scheduled.callback)(),
                None => break,
            }
        }
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + u64::from(delay_ms);
        clock.pending.push(Scheduled { id, due, callback });
        ManualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}
