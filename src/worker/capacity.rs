//! # Capacity: atomic in-flight counter with scoped slots.
//!
//! The capacity counter is the sole piece of shared mutable state in the
//! engine. [`Capacity::occupy`] increments it and returns a [`Slot`] guard
//! whose `Drop` decrements it, so every increment is paired with a decrement
//! on every path — success, failure, and unwind alike.
//!
//! ## Rules
//! - `available() == limit - in_flight`, computed saturating so a caller that
//!   violates the dispatch contract cannot underflow it
//! - the engine does not block or queue when full; capacity-aware dispatch is
//!   entirely the caller's responsibility

use std::sync::atomic::{AtomicUsize, Ordering};

/// In-flight execution counter bounded by a fixed limit.
pub(crate) struct Capacity {
    limit: usize,
    in_flight: AtomicUsize,
}

impl Capacity {
    /// Creates a counter with the given limit (clamped to a minimum of 1).
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Takes a slot, incrementing the in-flight count for the guard's lifetime.
    ///
    /// Precondition: the caller has verified `available() > 0`. The counter
    /// itself trusts the caller (pull-based dispatch model).
    pub(crate) fn occupy(&self) -> Slot<'_> {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        Slot { capacity: self }
    }

    pub(crate) fn limit(&self) -> usize {
        self.limit
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Free slots: `limit - in_flight`, floored at zero.
    pub(crate) fn available(&self) -> usize {
        self.limit.saturating_sub(self.in_flight())
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.available() == 0
    }
}

/// RAII guard for one occupied slot.
pub(crate) struct Slot<'a> {
    capacity: &'a Capacity,
}

impl Drop for Slot<'_> {
    fn drop(&mut self) {
        self.capacity.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}
