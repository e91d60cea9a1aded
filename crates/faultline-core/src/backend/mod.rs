//! External backend port: the simulated HTTP dependency.
//!
//! The harness never opens a real socket. This trait is the seam where a real
//! client could be plugged in; the shipped implementation draws failure modes
//! probabilistically instead.

mod simulated;

pub use simulated::{BackendFailureRates, SimulatedBackend};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::FaultError;

/// Minimal GET/POST surface with a timeout parameter.
///
/// Failures map onto `FaultError::ExternalApi` subcategories
/// (timeout / connection / http status / other).
#[async_trait]
pub trait ExternalBackend: Send + Sync {
    async fn get(&self, path: &str, timeout_secs: u64) -> Result<Value, FaultError>;

    async fn post(&self, path: &str, body: Value, timeout_secs: u64) -> Result<Value, FaultError>;
}
