//! Interrupt-to-loop tick counter
//!
//! Single producer (the timer interrupt) and single consumer (the control
//! loop). Both sides use one atomic read-modify-write each, so a tick is
//! never lost to a torn update or counted twice. On cores without native
//! atomic RMW, `portable-atomic` falls back to a critical section.

use portable_atomic::{AtomicU16, Ordering};

/// Pending tick count shared between an interrupt and the control loop
#[derive(Debug, Default)]
pub struct TickCounter {
    pending: AtomicU16,
}

impl TickCounter {
    /// Counter with no pending ticks
    pub const fn new() -> Self {
        Self {
            pending: AtomicU16::new(0),
        }
    }

    /// Record one tick (producer side)
    ///
    /// Saturates instead of wrapping; returns false if the tick had to be
    /// dropped because the counter is full.
    pub fn tick(&self) -> bool {
        self.pending
            .fetch_update(Ordering::Release, Ordering::Relaxed, |n| n.checked_add(1))
            .is_ok()
    }

    /// Consume one pending tick (consumer side)
    ///
    /// Returns false and leaves the counter alone if none is pending.
    pub fn take(&self) -> bool {
        self.pending
            .fetch_update(Ordering::Acquire, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok()
    }

    /// Ticks recorded but not yet consumed
    pub fn pending(&self) -> u16 {
        self.pending.load(Ordering::Acquire)
    }
}
