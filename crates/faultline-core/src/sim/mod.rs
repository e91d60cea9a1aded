//! Domain simulators.
//!
//! Every operation follows the same shape:
//! 1. deterministic precondition checks (always run first, never randomized)
//! 2. one fault-policy draw with the simulator's designated error kind
//! 3. a simulated latency sleep
//! 4. a structured `SimulationReport` payload
//!
//! Probabilities and latency ranges live in `FaultProfile`; the simulators
//! only consume them.

mod cleanup;
mod dataset;
mod discount;
mod email;
mod external;
mod files;
mod notification;
mod payment;
mod reporting;
mod sync;
mod weather;

use std::sync::Arc;

use crate::backend::ExternalBackend;
use crate::fault::FaultProfile;
use crate::ports::{Clock, Entropy};

/// The family of fault-injected operations.
///
/// Owns its ports so each method is a self-contained `simulate(inputs) ->
/// SimulationReport` call.
pub struct Simulators {
    entropy: Arc<dyn Entropy>,
    clock: Arc<dyn Clock>,
    backend: Arc<dyn ExternalBackend>,
    profile: FaultProfile,
}

impl Simulators {
    pub fn new(
        entropy: Arc<dyn Entropy>,
        clock: Arc<dyn Clock>,
        backend: Arc<dyn ExternalBackend>,
        profile: FaultProfile,
    ) -> Self {
        Self {
            entropy,
            clock,
            backend,
            profile,
        }
    }

    pub fn profile(&self) -> &FaultProfile {
        &self.profile
    }

    pub(crate) fn entropy(&self) -> &dyn Entropy {
        self.entropy.as_ref()
    }

    pub(crate) fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    pub(crate) fn backend(&self) -> &dyn ExternalBackend {
        self.backend.as_ref()
    }
}

#[cfg(test)]
pub(crate) mod testkit {
    //! Shared fixtures: deterministic simulators for the success/fail paths.

    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::Simulators;
    use crate::backend::{BackendFailureRates, SimulatedBackend};
    use crate::fault::FaultProfile;
    use crate::ports::{FixedClock, FixedEntropy};

    pub fn fixed_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    pub fn sims_with(profile: FaultProfile) -> Simulators {
        let entropy = Arc::new(FixedEntropy::new(0.5));
        let backend = SimulatedBackend::new(
            "https://httpbin.org",
            entropy.clone(),
            BackendFailureRates::reliable(),
        );
        Simulators::new(
            entropy,
            Arc::new(FixedClock::new(fixed_time())),
            Arc::new(backend),
            profile,
        )
    }

    /// All faults off, zero latency.
    pub fn calm_sims() -> Simulators {
        sims_with(FaultProfile::deterministic())
    }

    /// All faults on, zero latency.
    pub fn hostile_sims() -> Simulators {
        sims_with(FaultProfile::worst_case())
    }
}
