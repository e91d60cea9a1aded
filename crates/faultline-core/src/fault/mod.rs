//! Fault injection: probability policy and simulated latency.

pub mod latency;
pub mod policy;

pub use latency::LatencyRange;
pub use policy::{FaultProfile, FaultSpec, SimSettings};
