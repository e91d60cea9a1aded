//! Notification dispatch through the external backend.

use serde_json::json;

use super::Simulators;
use crate::domain::{ApiFailure, FaultError, SimulationReport};

impl Simulators {
    /// Send a user notification via the notification service.
    ///
    /// Payload: `{notification_id, status: "sent", timestamp}`.
    pub async fn send_notification(
        &self,
        user_id: u64,
        message: &str,
    ) -> Result<SimulationReport, FaultError> {
        let settings = &self.profile().send_notification;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::ExternalApi(ApiFailure::Other(
                settings.fault.message.clone(),
            )));
        }

        let now = self.now();
        self.backend()
            .post(
                "/post",
                json!({
                    "user_id": user_id,
                    "message": message,
                    "timestamp": now.to_rfc3339(),
                }),
                10,
            )
            .await?;

        settings.latency.sleep(self.entropy()).await;

        let id = format!("notif_{}", self.entropy().pick_u64(100_000..=999_999));
        Ok(SimulationReport::success(now)
            .with("notification_id", json!(id))
            .with("status", json!("sent"))
            .with("timestamp", json!(now.to_rfc3339())))
    }
}
