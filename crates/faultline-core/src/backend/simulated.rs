//! Simulated backend: probabilistic failure modes, echo-style success bodies.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::backend::ExternalBackend;
use crate::domain::{ApiFailure, FaultError};
use crate::ports::Entropy;

/// Failure rates for one simulated backend.
///
/// Modes are drawn in order from a single unit draw: timeout first, then
/// connection, then http error. The defaults model a flaky-but-usable
/// upstream; `reliable()` turns all of them off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackendFailureRates {
    pub timeout: f64,
    pub connection: f64,
    pub http_error: f64,
}

impl Default for BackendFailureRates {
    fn default() -> Self {
        Self {
            timeout: 0.10,
            connection: 0.05,
            http_error: 0.05,
        }
    }
}

impl BackendFailureRates {
    pub fn reliable() -> Self {
        Self {
            timeout: 0.0,
            connection: 0.0,
            http_error: 0.0,
        }
    }
}

pub struct SimulatedBackend {
    base_url: String,
    entropy: Arc<dyn Entropy>,
    rates: BackendFailureRates,
}

impl SimulatedBackend {
    pub fn new(
        base_url: impl Into<String>,
        entropy: Arc<dyn Entropy>,
        rates: BackendFailureRates,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            entropy,
            rates,
        }
    }

    /// One draw decides the fate of a request.
    fn draw_failure(&self, timeout_secs: u64) -> Result<(), FaultError> {
        let draw = self.entropy.draw_unit();

        if draw < self.rates.timeout {
            return Err(FaultError::ExternalApi(ApiFailure::Timeout {
                seconds: timeout_secs,
            }));
        }
        if draw < self.rates.timeout + self.rates.connection {
            return Err(FaultError::ExternalApi(ApiFailure::Connection));
        }
        if draw < self.rates.timeout + self.rates.connection + self.rates.http_error {
            let status = match self.entropy.pick_u64(0..=2) {
                0 => 500,
                1 => 502,
                _ => 503,
            };
            return Err(FaultError::ExternalApi(ApiFailure::HttpStatus(status)));
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ExternalBackend for SimulatedBackend {
    async fn get(&self, path: &str, timeout_secs: u64) -> Result<Value, FaultError> {
        self.draw_failure(timeout_secs)?;
        Ok(json!({
            "url": self.url(path),
            "method": "GET",
            "status": 200,
        }))
    }

    async fn post(&self, path: &str, body: Value, timeout_secs: u64) -> Result<Value, FaultError> {
        self.draw_failure(timeout_secs)?;
        Ok(json!({
            "url": self.url(path),
            "method": "POST",
            "status": 200,
            "json": body,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedEntropy;

    fn backend(unit: f64, rates: BackendFailureRates) -> SimulatedBackend {
        SimulatedBackend::new("https://httpbin.org", Arc::new(FixedEntropy::new(unit)), rates)
    }

    #[tokio::test]
    async fn reliable_backend_echoes_requests() {
        let b = backend(0.99, BackendFailureRates::reliable());

        let got = b.get("/json", 5).await.unwrap();
        assert_eq!(got["url"], "https://httpbin.org/json");
        assert_eq!(got["method"], "GET");

        let got = b.post("/post", json!({"k": "v"}), 10).await.unwrap();
        assert_eq!(got["json"]["k"], "v");
    }

    #[tokio::test]
    async fn low_draw_maps_to_timeout() {
        let b = backend(0.05, BackendFailureRates::default());
        let err = b.get("/json", 5).await.unwrap_err();
        assert_eq!(
            err,
            FaultError::ExternalApi(ApiFailure::Timeout { seconds: 5 })
        );
    }

    #[tokio::test]
    async fn middle_draw_maps_to_connection_refused() {
        // timeout 0.10 <= 0.12 < 0.15 (timeout + connection)
        let b = backend(0.12, BackendFailureRates::default());
        let err = b.get("/json", 5).await.unwrap_err();
        assert_eq!(err, FaultError::ExternalApi(ApiFailure::Connection));
    }

    #[tokio::test]
    async fn upper_draw_maps_to_http_status() {
        // 0.15 <= 0.17 < 0.20 (timeout + connection + http_error)
        let b = backend(0.17, BackendFailureRates::default());
        let err = b.post("/post", json!({}), 5).await.unwrap_err();
        // FixedEntropy picks range start -> status 500
        assert_eq!(err, FaultError::ExternalApi(ApiFailure::HttpStatus(500)));
    }

    #[tokio::test]
    async fn draw_above_all_rates_succeeds() {
        let b = backend(0.5, BackendFailureRates::default());
        assert!(b.get("/json", 5).await.is_ok());
    }
}
