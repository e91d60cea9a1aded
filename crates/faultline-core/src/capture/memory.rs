//! Recording transport: keeps every event in memory.
//!
//! Public (not test-only) so downstream crates can assert on captured events
//! the same way this crate's own tests do.

use std::sync::{Mutex, MutexGuard};

use crate::capture::{CaptureEvent, CaptureTransport};

#[derive(Debug, Default)]
pub struct MemoryTransport {
    events: Mutex<Vec<CaptureEvent>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<CaptureEvent>> {
        // A panic while holding the lock only loses recorded events.
        self.events.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Snapshot of everything sent so far.
    pub fn events(&self) -> Vec<CaptureEvent> {
        self.guard().clone()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CaptureTransport for MemoryTransport {
    fn send(&self, event: CaptureEvent) {
        self.guard().push(event);
    }
}
