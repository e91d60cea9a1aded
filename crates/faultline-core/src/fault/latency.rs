//! Simulated latency: models a slow downstream dependency.
//!
//! The sleep blocks only the calling task and is interruptible only at the
//! granularity of the whole call (no mid-sleep cancellation).

use std::time::Duration;

use crate::ports::Entropy;

/// A uniform latency range in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange {
    min_ms: u64,
    max_ms: u64,
}

impl LatencyRange {
    /// No delay at all.
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    pub fn from_ms(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: min_ms.max(max_ms),
        }
    }

    pub fn is_none(&self) -> bool {
        self.max_ms == 0
    }

    /// Scale both bounds (rounding down).
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: u64| ((ms as f64) * factor.max(0.0)) as u64;
        Self::from_ms(scale(self.min_ms), scale(self.max_ms))
    }

    /// Draw a duration from the range without sleeping.
    pub fn draw(&self, entropy: &dyn Entropy) -> Duration {
        if self.is_none() {
            return Duration::ZERO;
        }
        Duration::from_millis(entropy.pick_u64(self.min_ms..=self.max_ms))
    }

    /// Draw a duration and sleep for it.
    pub async fn sleep(&self, entropy: &dyn Entropy) {
        let delay = self.draw(entropy);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedEntropy, ThreadEntropy};

    #[test]
    fn none_draws_zero() {
        let range = LatencyRange::none();
        assert!(range.is_none());
        assert_eq!(range.draw(&ThreadEntropy), Duration::ZERO);
    }

    #[test]
    fn draw_stays_in_range() {
        let range = LatencyRange::from_ms(500, 2_000);
        for _ in 0..100 {
            let d = range.draw(&ThreadEntropy);
            assert!(d >= Duration::from_millis(500));
            assert!(d <= Duration::from_millis(2_000));
        }
    }

    #[test]
    fn reversed_bounds_are_normalized() {
        let range = LatencyRange::from_ms(2_000, 500);
        assert_eq!(range, LatencyRange::from_ms(500, 2_000));
    }

    #[test]
    fn scaling_shrinks_the_range() {
        let range = LatencyRange::from_ms(1_000, 3_000).scaled(0.01);
        assert_eq!(range, LatencyRange::from_ms(10, 30));

        let zero = LatencyRange::from_ms(1_000, 3_000).scaled(0.0);
        assert!(zero.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn sleep_with_fixed_entropy_uses_lower_bound() {
        let range = LatencyRange::from_ms(100, 200);

        let before = tokio::time::Instant::now();
        range.sleep(&FixedEntropy::new(0.0)).await;
        assert_eq!(before.elapsed(), Duration::from_millis(100));
    }
}
