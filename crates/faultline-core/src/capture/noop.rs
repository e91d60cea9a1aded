//! No-op transport: used when no DSN is configured.

use crate::capture::{CaptureEvent, CaptureTransport};

/// Drops every event. The degraded mode when capture is unconfigured; the
/// warning is emitted once at construction time, not per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransport;

impl CaptureTransport for NoopTransport {
    fn send(&self, _event: CaptureEvent) {}
}
