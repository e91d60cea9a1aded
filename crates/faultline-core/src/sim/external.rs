//! Generic external API call (the timeout path of the catalogue).

use serde_json::json;

use super::Simulators;
use crate::domain::{FaultError, SimulationReport};

impl Simulators {
    /// Call an arbitrary endpoint on the external backend.
    ///
    /// All failure modes (timeout, connection, http status) come from the
    /// backend itself; this simulator has no fault draw of its own.
    ///
    /// Payload: `{endpoint, response}`.
    pub async fn call_external_api(
        &self,
        endpoint: &str,
        timeout_secs: u64,
    ) -> Result<SimulationReport, FaultError> {
        let body = self.backend().get(endpoint, timeout_secs).await?;

        Ok(SimulationReport::success(self.now())
            .with("endpoint", json!(endpoint))
            .with("response", body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendFailureRates, SimulatedBackend};
    use crate::domain::ApiFailure;
    use crate::fault::FaultProfile;
    use crate::ports::{FixedClock, FixedEntropy};
    use crate::sim::testkit::{calm_sims, fixed_time};
    use std::sync::Arc;

    #[tokio::test]
    async fn success_echoes_the_endpoint() {
        let report = calm_sims().call_external_api("/json", 5).await.unwrap();
        assert_eq!(report.payload["endpoint"], "/json");
        assert_eq!(report.payload["response"]["status"], 200);
    }

    #[tokio::test]
    async fn timeout_path_carries_the_timeout() {
        let entropy = Arc::new(FixedEntropy::new(0.0));
        let backend = SimulatedBackend::new(
            "https://httpbin.org",
            entropy.clone(),
            BackendFailureRates::default(),
        );
        let sims = super::Simulators::new(
            entropy,
            Arc::new(FixedClock::new(fixed_time())),
            Arc::new(backend),
            FaultProfile::deterministic(),
        );

        let err = sims.call_external_api("/delay/10", 7).await.unwrap_err();
        assert_eq!(
            err,
            FaultError::ExternalApi(ApiFailure::Timeout { seconds: 7 })
        );
    }
}
