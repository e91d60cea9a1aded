//! Report generation simulation.

use serde_json::{Value, json};

use super::Simulators;
use crate::domain::{FaultError, SimulationReport};

impl Simulators {
    /// Generate a report over the given data points.
    ///
    /// Payload: `{report_type, data_points, generated_at, summary}`.
    pub async fn generate_report(
        &self,
        data: &[Value],
        report_type: &str,
    ) -> Result<SimulationReport, FaultError> {
        if data.is_empty() {
            return Err(FaultError::Validation(
                "No data provided for report generation".into(),
            ));
        }

        let settings = &self.profile().generate_report;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::Generic(settings.fault.message.clone()));
        }

        settings.latency.sleep(self.entropy()).await;

        let now = self.now();
        Ok(SimulationReport::success(now)
            .with("report_type", json!(report_type))
            .with("data_points", json!(data.len()))
            .with("generated_at", json!(now.to_rfc3339()))
            .with(
                "summary",
                json!({
                    "total_records": data.len(),
                    "status": "completed",
                }),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::testkit::{calm_sims, hostile_sims};

    #[tokio::test]
    async fn report_counts_data_points() {
        let data = vec![json!({"a": 1}), json!({"b": 2}), json!({"c": 3})];
        let report = calm_sims().generate_report(&data, "summary").await.unwrap();

        assert_eq!(report.payload["report_type"], "summary");
        assert_eq!(report.payload["data_points"], 3);
        assert_eq!(report.payload["summary"]["total_records"], 3);
        assert_eq!(report.payload["summary"]["status"], "completed");
    }

    #[tokio::test]
    async fn empty_data_fails_before_fault_draw() {
        let err = hostile_sims().generate_report(&[], "summary").await.unwrap_err();
        assert_eq!(
            err,
            FaultError::Validation("No data provided for report generation".into())
        );
    }

    #[tokio::test]
    async fn injected_fault_is_generic() {
        let data = vec![json!(1)];
        let err = hostile_sims()
            .generate_report(&data, "summary")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            FaultError::Generic("Report generation service error".into())
        );
    }
}
