//! Weather fetch simulation.

use serde_json::json;

use super::Simulators;
use crate::domain::{ApiFailure, FaultError, SimulationReport};

const DESCRIPTIONS: [&str; 4] = ["sunny", "cloudy", "rainy", "snowy"];

impl Simulators {
    /// Fetch current weather for a city from the weather service.
    ///
    /// Payload: `{city, temperature, humidity, description, timestamp}` with
    /// temperature in -10..=35 and humidity in 30..=90.
    pub async fn fetch_weather_data(&self, city: &str) -> Result<SimulationReport, FaultError> {
        let settings = &self.profile().fetch_weather;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::ExternalApi(ApiFailure::Other(
                settings.fault.message.clone(),
            )));
        }

        self.backend().get("/json", 5).await?;

        settings.latency.sleep(self.entropy()).await;

        // 温度は -10..=35 を 0..=45 のオフセットとして引く
        let temperature = self.entropy().pick_u64(0..=45) as i64 - 10;
        let humidity = self.entropy().pick_u64(30..=90);
        let description = DESCRIPTIONS[self.entropy().pick_u64(0..=3) as usize];

        let now = self.now();
        Ok(SimulationReport::success(now)
            .with("city", json!(city))
            .with("temperature", json!(temperature))
            .with("humidity", json!(humidity))
            .with("description", json!(description))
            .with("timestamp", json!(now.to_rfc3339())))
    }
}
