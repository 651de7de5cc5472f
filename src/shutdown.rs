//! Process-wide shutdown coordination.
//! Provides a flag set by the ctrlc handler so the relocation loop can
//! abort between entries instead of mid-move.
//!
//! Relaxed atomics are sufficient for a one-way "stop" flag, and
//! `request()` is safe to call from signal handlers.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}
