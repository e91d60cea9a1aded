//! External data synchronization simulation.

use serde_json::json;

use super::Simulators;
use crate::domain::{ApiFailure, FaultError, SimulationReport};

impl Simulators {
    /// Sync one data category with the external system.
    ///
    /// Payload: `{sync_type, records_synced, status: "completed", synced_at}`.
    pub async fn sync_external_data(
        &self,
        sync_type: &str,
    ) -> Result<SimulationReport, FaultError> {
        let settings = &self.profile().sync_external_data;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::ExternalApi(ApiFailure::Other(
                settings.fault.message.clone(),
            )));
        }

        settings.latency.sleep(self.entropy()).await;

        let now = self.now();
        let synced = self.entropy().pick_u64(500..=5_000);
        Ok(SimulationReport::success(now)
            .with("sync_type", json!(sync_type))
            .with("records_synced", json!(synced))
            .with("status", json!("completed"))
            .with("synced_at", json!(now.to_rfc3339())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::testkit::{calm_sims, hostile_sims};

    #[tokio::test]
    async fn sync_reports_record_count() {
        let report = calm_sims().sync_external_data("customers").await.unwrap();
        assert_eq!(report.payload["sync_type"], "customers");
        assert_eq!(report.payload["status"], "completed");
        let synced = report.payload["records_synced"].as_u64().unwrap();
        assert!((500..=5_000).contains(&synced));
    }

    #[tokio::test]
    async fn injected_fault_is_external_api() {
        let err = hostile_sims().sync_external_data("customers").await.unwrap_err();
        assert_eq!(
            err,
            FaultError::ExternalApi(ApiFailure::Other("External sync service error".into()))
        );
    }
}
