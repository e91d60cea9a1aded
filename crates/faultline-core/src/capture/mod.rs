//! Capture gateway: the boundary to the external observability backend.
//!
//! Design:
//! - `CaptureGateway` is what the rest of the crate calls (report exception /
//!   report message).
//! - `CaptureTransport` is the wire: where an enriched event actually goes.
//! - `Reporter` sits between the two and performs enrichment on *every* event;
//!   there is no code path that reaches a transport without it.
//!
//! Transmission is fire-and-forget: transport failures are logged, never
//! propagated.

mod log;
mod memory;
mod noop;
mod reporter;

pub use log::LogTransport;
pub use memory::MemoryTransport;
pub use noop::NoopTransport;
pub use reporter::Reporter;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::FaultError;

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// One enriched event, ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureEvent {
    pub message: String,
    pub level: Level,
    pub tags: BTreeMap<String, String>,
    pub context: BTreeMap<String, String>,
}

/// What callers use to report failures and messages.
pub trait CaptureGateway: Send + Sync {
    fn report_exception(&self, err: &FaultError);
    fn report_message(&self, text: &str, level: Level);
}

/// Where enriched events are transmitted.
pub trait CaptureTransport: Send + Sync {
    /// Deliver one event. Errors are the transport's own problem; the core
    /// treats transmission as fire-and-forget.
    fn send(&self, event: CaptureEvent);
}
