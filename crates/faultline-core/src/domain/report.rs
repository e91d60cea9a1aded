//! Simulation report: common result format for all domain simulators.
//!
//! This module is simulator-agnostic: it only defines the "shape" of results
//! the harness can record and report later. Each simulator documents its own
//! payload schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A unified classification of a simulation result.
///
/// Serialized as SCREAMING_SNAKE_CASE: SUCCESS / FAILURE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SimOutcome {
    Success,
    Failure,
}

/// A common result format for a simulator run.
///
/// `payload` is a free-form JSON map; its schema varies per simulator
/// (transaction ids, weather readings, cleanup counters, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub outcome: SimOutcome,

    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub payload: serde_json::Map<String, Value>,

    pub timestamp: DateTime<Utc>,
}

impl SimulationReport {
    pub fn success(timestamp: DateTime<Utc>) -> Self {
        Self {
            outcome: SimOutcome::Success,
            payload: serde_json::Map::new(),
            timestamp,
        }
    }

    pub fn failure(timestamp: DateTime<Utc>, reason: impl Into<String>) -> Self {
        let mut payload = serde_json::Map::new();
        payload.insert("error".to_string(), Value::String(reason.into()));
        Self {
            outcome: SimOutcome::Failure,
            payload,
            timestamp,
        }
    }

    /// Attach one payload field (builder style).
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }
}
