//! Fault policy: decides whether an operation should fail this time.
//!
//! The decision is a single uniform draw compared against a fixed probability.
//! It is re-evaluated on every call; there is no memory across calls and the
//! core never seeds its own randomness (tests inject `FixedEntropy` instead).

use crate::fault::LatencyRange;
use crate::ports::Entropy;

/// A fault to inject with a fixed probability.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultSpec {
    /// Probability in `[0, 1]`; values outside are clamped.
    pub probability: f64,

    /// Message carried by the injected error.
    pub message: String,
}

impl FaultSpec {
    pub fn new(probability: f64, message: impl Into<String>) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            message: message.into(),
        }
    }

    /// Never fires. Used by deterministic test profiles.
    pub fn never() -> Self {
        Self::new(0.0, "disabled")
    }

    /// Always fires.
    pub fn always(message: impl Into<String>) -> Self {
        Self::new(1.0, message)
    }

    /// One independent draw: `true` means "inject the fault now".
    pub fn should_fail(&self, entropy: &dyn Entropy) -> bool {
        entropy.draw_unit() < self.probability
    }
}

/// Per-simulator settings: fault spec + latency range.
#[derive(Debug, Clone, PartialEq)]
pub struct SimSettings {
    pub fault: FaultSpec,
    pub latency: LatencyRange,
}

impl SimSettings {
    pub fn new(fault: FaultSpec, latency: LatencyRange) -> Self {
        Self { fault, latency }
    }
}

/// The full fault table for every simulator.
///
/// `Default` carries the production policy (the values are policy, not
/// incidental); test profiles force every probability to 0 or 1.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultProfile {
    pub validate_email: SimSettings,
    pub calculate_discount: SimSettings,
    pub process_payment: SimSettings,
    pub send_notification: SimSettings,
    pub fetch_weather: SimSettings,
    pub generate_report: SimSettings,
    pub cleanup_old_data: SimSettings,
    pub send_email: SimSettings,
    pub sync_external_data: SimSettings,
    pub process_large_dataset: SimSettings,
    pub process_file: SimSettings,
}

impl Default for FaultProfile {
    fn default() -> Self {
        Self {
            validate_email: SimSettings::new(
                FaultSpec::new(0.05, "Email validation service unavailable"),
                LatencyRange::none(),
            ),
            calculate_discount: SimSettings::new(
                FaultSpec::new(0.03, "Discount calculation service error"),
                LatencyRange::none(),
            ),
            process_payment: SimSettings::new(
                FaultSpec::new(0.20, "Payment gateway temporarily unavailable"),
                LatencyRange::from_ms(500, 2_000),
            ),
            send_notification: SimSettings::new(
                FaultSpec::new(0.15, "Notification service unavailable"),
                LatencyRange::none(),
            ),
            fetch_weather: SimSettings::new(
                FaultSpec::new(0.10, "Weather service temporarily unavailable"),
                LatencyRange::none(),
            ),
            generate_report: SimSettings::new(
                FaultSpec::new(0.07, "Report generation service error"),
                LatencyRange::from_ms(1_000, 3_000),
            ),
            cleanup_old_data: SimSettings::new(
                FaultSpec::new(0.08, "Data cleanup service error"),
                LatencyRange::from_ms(500, 2_000),
            ),
            send_email: SimSettings::new(
                FaultSpec::new(0.15, "Email service temporarily unavailable"),
                LatencyRange::from_ms(1_000, 3_000),
            ),
            sync_external_data: SimSettings::new(
                FaultSpec::new(0.12, "External sync service error"),
                LatencyRange::from_ms(2_000, 6_000),
            ),
            process_large_dataset: SimSettings::new(
                FaultSpec::new(0.05, "Dataset processing service error"),
                LatencyRange::from_ms(5_000, 15_000),
            ),
            process_file: SimSettings::new(
                FaultSpec::new(0.10, "File system temporarily unavailable"),
                LatencyRange::from_ms(0, 5_000),
            ),
        }
    }
}

impl FaultProfile {
    /// Every fault disabled, zero latency. The success-path-only profile.
    pub fn deterministic() -> Self {
        Self::default().map(|_| SimSettings::new(FaultSpec::never(), LatencyRange::none()))
    }

    /// Every fault fires on the first draw, zero latency.
    pub fn worst_case() -> Self {
        Self::default().map(|s| {
            SimSettings::new(
                FaultSpec::always(s.fault.message.clone()),
                LatencyRange::none(),
            )
        })
    }

    /// Scale all latency ranges (e.g. 0.01 for a fast demo run).
    pub fn with_latency_scale(self, factor: f64) -> Self {
        self.map(|s| SimSettings::new(s.fault.clone(), s.latency.scaled(factor)))
    }

    fn map(self, f: impl Fn(&SimSettings) -> SimSettings) -> Self {
        Self {
            validate_email: f(&self.validate_email),
            calculate_discount: f(&self.calculate_discount),
            process_payment: f(&self.process_payment),
            send_notification: f(&self.send_notification),
            fetch_weather: f(&self.fetch_weather),
            generate_report: f(&self.generate_report),
            cleanup_old_data: f(&self.cleanup_old_data),
            send_email: f(&self.send_email),
            sync_external_data: f(&self.sync_external_data),
            process_large_dataset: f(&self.process_large_dataset),
            process_file: f(&self.process_file),
        }
    }
}
