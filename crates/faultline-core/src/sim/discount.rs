//! Discount calculation with a user-type multiplier.

use serde_json::json;

use super::Simulators;
use crate::domain::{FaultError, SimulationReport};

/// Multiplier applied on top of the base discount. Unknown types get 1.0.
fn user_type_multiplier(user_type: &str) -> f64 {
    match user_type {
        "premium" => 1.1,
        "vip" => 1.2,
        _ => 1.0,
    }
}

impl Simulators {
    /// Calculate a discounted price.
    ///
    /// `discount_amount = price * discount_percent/100 * multiplier(user_type)`,
    /// `final_price = price - discount_amount`.
    ///
    /// Payload: `{original_price, discount_percent, discount_amount,
    /// final_price, user_type}`.
    pub async fn calculate_discount(
        &self,
        price: f64,
        discount_percent: f64,
        user_type: &str,
    ) -> Result<SimulationReport, FaultError> {
        if price < 0.0 {
            return Err(FaultError::BusinessLogic("Price cannot be negative".into()));
        }
        if !(0.0..=100.0).contains(&discount_percent) {
            return Err(FaultError::BusinessLogic(
                "Discount percent must be between 0 and 100".into(),
            ));
        }

        let settings = &self.profile().calculate_discount;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::BusinessLogic(settings.fault.message.clone()));
        }

        settings.latency.sleep(self.entropy()).await;

        let base_discount = price * (discount_percent / 100.0);
        let discount_amount = base_discount * user_type_multiplier(user_type);

        Ok(SimulationReport::success(self.now())
            .with("original_price", json!(price))
            .with("discount_percent", json!(discount_percent))
            .with("discount_amount", json!(discount_amount))
            .with("final_price", json!(price - discount_amount))
            .with("user_type", json!(user_type)))
    }
}
