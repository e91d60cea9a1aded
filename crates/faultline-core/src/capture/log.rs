//! Log transport: "transmits" events through the tracing pipeline.
//!
//! This is the stand-in for a real network sender. The DSN is recorded on
//! every event so an operator can see where events would have gone.

use crate::capture::{CaptureEvent, CaptureTransport, Level};

pub struct LogTransport {
    dsn: String,
}

impl LogTransport {
    pub fn new(dsn: impl Into<String>) -> Self {
        Self { dsn: dsn.into() }
    }
}

impl CaptureTransport for LogTransport {
    fn send(&self, event: CaptureEvent) {
        let tags = serde_json::to_string(&event.tags).unwrap_or_default();
        match event.level {
            Level::Error => tracing::error!(
                dsn = %self.dsn,
                tags = %tags,
                "capture: {}",
                event.message
            ),
            Level::Warning => tracing::warn!(
                dsn = %self.dsn,
                tags = %tags,
                "capture: {}",
                event.message
            ),
            Level::Info => tracing::info!(
                dsn = %self.dsn,
                tags = %tags,
                "capture: {}",
                event.message
            ),
        }
    }
}
