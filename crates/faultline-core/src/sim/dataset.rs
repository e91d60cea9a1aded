//! Large-dataset processing simulation (long-running background work).

use serde_json::json;

use super::Simulators;
use crate::domain::{FaultError, SimulationReport};

impl Simulators {
    /// Crunch a large dataset. The longest-running simulator by design.
    ///
    /// Payload: `{dataset_id, records_processed, status: "completed",
    /// processed_at}`.
    pub async fn process_large_dataset(
        &self,
        dataset_id: &str,
    ) -> Result<SimulationReport, FaultError> {
        if dataset_id.is_empty() {
            return Err(FaultError::Validation("Dataset id cannot be empty".into()));
        }

        let settings = &self.profile().process_large_dataset;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::Generic(settings.fault.message.clone()));
        }

        settings.latency.sleep(self.entropy()).await;

        let now = self.now();
        let processed = self.entropy().pick_u64(10_000..=100_000);
        Ok(SimulationReport::success(now)
            .with("dataset_id", json!(dataset_id))
            .with("records_processed", json!(processed))
            .with("status", json!("completed"))
            .with("processed_at", json!(now.to_rfc3339())))
    }
}
