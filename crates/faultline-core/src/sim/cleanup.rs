//! Old-data cleanup simulation.

use chrono::Duration;
use serde_json::json;

use super::Simulators;
use crate::domain::{FaultError, SimulationReport};

impl Simulators {
    /// Sweep records of `data_type` older than the cutoff.
    ///
    /// Payload: `{data_type, cutoff_date, records_cleaned, cleanup_status:
    /// "completed", cleaned_at}`.
    pub async fn cleanup_old_data(
        &self,
        data_type: &str,
        older_than_days: i64,
    ) -> Result<SimulationReport, FaultError> {
        if data_type.is_empty() {
            return Err(FaultError::Validation("Data type cannot be empty".into()));
        }
        if older_than_days < 0 {
            return Err(FaultError::BusinessLogic("Days must be positive".into()));
        }

        let settings = &self.profile().cleanup_old_data;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::Generic(settings.fault.message.clone()));
        }

        settings.latency.sleep(self.entropy()).await;

        let now = self.now();
        let cutoff = now - Duration::days(older_than_days);
        let cleaned = self.entropy().pick_u64(10..=1_000);
        Ok(SimulationReport::success(now)
            .with("data_type", json!(data_type))
            .with("cutoff_date", json!(cutoff.to_rfc3339()))
            .with("records_cleaned", json!(cleaned))
            .with("cleanup_status", json!("completed"))
            .with("cleaned_at", json!(now.to_rfc3339())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::testkit::{calm_sims, fixed_time, hostile_sims};

    #[tokio::test]
    async fn cutoff_is_days_before_now() {
        let report = calm_sims().cleanup_old_data("logs", 30).await.unwrap();

        let expected = (fixed_time() - Duration::days(30)).to_rfc3339();
        assert_eq!(report.payload["cutoff_date"], expected.as_str());
        assert_eq!(report.payload["cleanup_status"], "completed");
        let cleaned = report.payload["records_cleaned"].as_u64().unwrap();
        assert!((10..=1_000).contains(&cleaned));
    }

    #[tokio::test]
    async fn empty_data_type_is_rejected() {
        let err = hostile_sims().cleanup_old_data("", 30).await.unwrap_err();
        assert_eq!(err, FaultError::Validation("Data type cannot be empty".into()));
    }

    #[tokio::test]
    async fn negative_days_are_rejected() {
        let err = calm_sims().cleanup_old_data("logs", -1).await.unwrap_err();
        assert_eq!(err, FaultError::BusinessLogic("Days must be positive".into()));
    }

    #[tokio::test]
    async fn injected_fault_is_generic() {
        let err = hostile_sims().cleanup_old_data("logs", 30).await.unwrap_err();
        assert_eq!(err, FaultError::Generic("Data cleanup service error".into()));
    }
}
