//! Email operations: syntax validation and simulated delivery.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use super::Simulators;
use crate::domain::{ApiFailure, FaultError, SimulationReport};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .unwrap_or_else(|e| panic!("email regex: {e}"))
});

impl Simulators {
    /// Validate an email address.
    ///
    /// Payload: `{email, valid: true}`.
    pub async fn validate_email(&self, email: &str) -> Result<SimulationReport, FaultError> {
        if email.is_empty() {
            return Err(FaultError::Validation("Email cannot be empty".into()));
        }

        let settings = &self.profile().validate_email;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::Validation(settings.fault.message.clone()));
        }

        if !EMAIL_RE.is_match(email) {
            return Err(FaultError::Validation("Invalid email format".into()));
        }

        settings.latency.sleep(self.entropy()).await;

        Ok(SimulationReport::success(self.now())
            .with("email", json!(email))
            .with("valid", json!(true)))
    }

    /// Deliver an email through the (simulated) mail service.
    ///
    /// Payload: `{email, subject, status: "sent", sent_at}`.
    pub async fn send_email(
        &self,
        email: &str,
        subject: &str,
        _body: &str,
    ) -> Result<SimulationReport, FaultError> {
        if email.is_empty() {
            return Err(FaultError::Validation("Email cannot be empty".into()));
        }

        let settings = &self.profile().send_email;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::ExternalApi(ApiFailure::Other(
                settings.fault.message.clone(),
            )));
        }

        settings.latency.sleep(self.entropy()).await;

        let now = self.now();
        Ok(SimulationReport::success(now)
            .with("email", json!(email))
            .with("subject", json!(subject))
            .with("status", json!("sent"))
            .with("sent_at", json!(now.to_rfc3339())))
    }
}
