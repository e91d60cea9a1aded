//! File processing simulation (filesystem-backed preconditions).

use std::path::Path;

use serde_json::json;

use super::Simulators;
use crate::domain::{FaultError, SimulationReport};

impl Simulators {
    /// Process a file on disk.
    ///
    /// The file must exist; a missing path is a deterministic `NotFound`,
    /// independent of fault injection.
    ///
    /// Payload: `{file_path, file_size, processing_time_ms, status:
    /// "processed", timestamp}`.
    pub async fn process_file(&self, file_path: &str) -> Result<SimulationReport, FaultError> {
        if file_path.is_empty() {
            return Err(FaultError::Validation("File path cannot be empty".into()));
        }

        let settings = &self.profile().process_file;
        if settings.fault.should_fail(self.entropy()) {
            return Err(FaultError::Generic(settings.fault.message.clone()));
        }

        if !Path::new(file_path).exists() {
            return Err(FaultError::NotFound(format!("File not found: {file_path}")));
        }

        let metadata = tokio::fs::metadata(file_path)
            .await
            .map_err(|e| FaultError::NotFound(format!("File not found: {file_path} ({e})")))?;
        let file_size = metadata.len();

        let delay = settings.latency.draw(self.entropy());
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let now = self.now();
        Ok(SimulationReport::success(now)
            .with("file_path", json!(file_path))
            .with("file_size", json!(file_size))
            .with("processing_time_ms", json!(delay.as_millis() as u64))
            .with("status", json!("processed"))
            .with("timestamp", json!(now.to_rfc3339())))
    }
}
