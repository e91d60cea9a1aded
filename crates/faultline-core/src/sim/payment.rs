//! Payment processing simulation.

use serde_json::json;

use super::Simulators;
use crate::domain::{FaultError, SimulationReport};

/// Upper bound on a single payment.
const MAX_AMOUNT: f64 = 10_000.0;

impl Simulators {
    /// Process a payment against the (simulated) gateway.
    ///
    /// Payload: `{transaction_id, amount, status: "success", timestamp}`.
    pub async fn process_payment(
        &self,
        card_number: &str,
        amount: f64,
    ) -> Result<SimulationReport, FaultError> {
        if card_number.len() < 10 {
            return Err(FaultError::Payment("Invalid card number".into()));
        }
        if amount <= 0.0 {
            return Err(FaultError::Payment("Invalid payment amount".into()));
        }
        if amount > MAX_AMOUNT {
            return Err(FaultError::Payment("Payment amount exceeds limit".into()));
        }

        let settings = &self.profile().process_payment;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::Payment(settings.fault.message.clone()));
        }

        settings.latency.sleep(self.entropy()).await;

        let now = self.now();
        let txn = format!("txn_{}", self.entropy().pick_u64(100_000..=999_999));
        Ok(SimulationReport::success(now)
            .with("transaction_id", json!(txn))
            .with("amount", json!(amount))
            .with("status", json!("success"))
            .with("timestamp", json!(now.to_rfc3339())))
    }
}
