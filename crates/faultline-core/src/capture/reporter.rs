//! Reporter: total enrichment in front of any transport.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::capture::{CaptureEvent, CaptureGateway, CaptureTransport, Level};
use crate::domain::FaultError;

const COMPONENT_TAG: &str = "test-project";
const PURPOSE: &str = "observability pipeline testing";

/// Enriches every event with fixed tags and context, then hands it to the
/// configured transport.
pub struct Reporter {
    transport: Arc<dyn CaptureTransport>,
    environment: String,
}

impl Reporter {
    pub fn new(transport: Arc<dyn CaptureTransport>, environment: impl Into<String>) -> Self {
        Self {
            transport,
            environment: environment.into(),
        }
    }

    /// Build a reporter from configuration.
    ///
    /// An absent or empty DSN must not crash anything: it degrades to a no-op
    /// transport with a visible warning.
    pub fn from_config(dsn: Option<&str>, environment: &str) -> Self {
        match dsn {
            Some(dsn) if !dsn.trim().is_empty() => {
                Self::new(Arc::new(super::LogTransport::new(dsn)), environment)
            }
            _ => {
                tracing::warn!("no capture DSN configured; events will be dropped");
                Self::new(Arc::new(super::NoopTransport), environment)
            }
        }
    }

    fn enrich(&self, message: String, level: Level, error_kind: Option<&str>) -> CaptureEvent {
        let mut tags = BTreeMap::new();
        tags.insert("component".to_string(), COMPONENT_TAG.to_string());
        tags.insert("test_project".to_string(), "true".to_string());
        if let Some(kind) = error_kind {
            tags.insert("error_kind".to_string(), kind.to_string());
        }

        let mut context = BTreeMap::new();
        context.insert("purpose".to_string(), PURPOSE.to_string());
        context.insert(
            "version".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        context.insert("environment".to_string(), self.environment.clone());

        CaptureEvent {
            message,
            level,
            tags,
            context,
        }
    }
}

impl CaptureGateway for Reporter {
    fn report_exception(&self, err: &FaultError) {
        let event = self.enrich(err.to_string(), Level::Error, Some(err.kind()));
        self.transport.send(event);
    }

    fn report_message(&self, text: &str, level: Level) {
        let event = self.enrich(text.to_string(), level, None);
        self.transport.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::MemoryTransport;
    use crate::domain::{ApiFailure, FaultError};
    use rstest::rstest;

    fn recording_reporter() -> (Reporter, Arc<MemoryTransport>) {
        let transport = Arc::new(MemoryTransport::new());
        let reporter = Reporter::new(Arc::clone(&transport) as Arc<dyn CaptureTransport>, "test");
        (reporter, transport)
    }

    #[test]
    fn exception_events_carry_fixed_tags_and_context() {
        let (reporter, transport) = recording_reporter();

        reporter.report_exception(&FaultError::Payment("gateway down".into()));

        let events = transport.events();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.level, Level::Error);
        assert_eq!(event.tags["component"], "test-project");
        assert_eq!(event.tags["test_project"], "true");
        assert_eq!(event.tags["error_kind"], "payment");
        assert_eq!(event.context["purpose"], PURPOSE);
        assert!(event.context.contains_key("version"));
    }

    #[rstest]
    #[case::info(Level::Info)]
    #[case::warning(Level::Warning)]
    #[case::error(Level::Error)]
    fn message_events_are_enriched_at_every_level(#[case] level: Level) {
        let (reporter, transport) = recording_reporter();

        reporter.report_message("load test marker", level);

        let events = transport.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, level);
        assert_eq!(events[0].tags["component"], "test-project");
        assert_eq!(events[0].tags["test_project"], "true");
        // message 経由ではエラー種別タグは付かない
        assert!(!events[0].tags.contains_key("error_kind"));
    }

    #[test]
    fn api_failures_tag_their_subcategory() {
        let (reporter, transport) = recording_reporter();

        reporter.report_exception(&FaultError::ExternalApi(ApiFailure::Timeout { seconds: 5 }));
        reporter.report_exception(&FaultError::ExternalApi(ApiFailure::HttpStatus(503)));

        let events = transport.events();
        assert_eq!(events[0].tags["error_kind"], "external_api.timeout");
        assert_eq!(events[1].tags["error_kind"], "external_api.http_status");
    }

    #[test]
    fn missing_dsn_degrades_to_noop() {
        // 落ちないことが重要（イベントは捨てられる）
        let reporter = Reporter::from_config(None, "test");
        reporter.report_message("dropped", Level::Info);

        let reporter = Reporter::from_config(Some("   "), "test");
        reporter.report_exception(&FaultError::Generic("dropped".into()));
    }
}
