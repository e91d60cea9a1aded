//! Background task registry.
//!
//! In-memory tracker of asynchronously executed simulators and their
//! lifecycle. Records live until an explicit cleanup sweep or process exit;
//! nothing is persisted.

mod kind;
mod record;
mod registry;

pub use kind::{TaskArgs, TaskKind};
pub use record::{TaskCounts, TaskRecord, TaskStatus, TaskStatusView};
pub use registry::TaskRegistry;
