//! Entropy port - 乱数の抽象化
//!
//! フォールト判定・遅延・合成ペイロードが消費する乱数をここに集約します。
//! 本番は thread_rng、テストは FixedEntropy で決定的に差し替え可能。
//! コア側で乱数を memoize したり seed 固定したりはしません（呼び出しごとに
//! 独立に評価されるのが仕様）。

use std::ops::{Range, RangeInclusive};

use rand::Rng;

/// Entropy は一様乱数を提供
pub trait Entropy: Send + Sync {
    /// Uniform draw in `[0, 1)`.
    fn draw_unit(&self) -> f64;

    /// Uniform integer in the inclusive range.
    fn pick_u64(&self, range: RangeInclusive<u64>) -> u64;

    /// Uniform float in the half-open range.
    fn pick_f64(&self, range: Range<f64>) -> f64;
}

/// 本番用: thread_rng ベース
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn draw_unit(&self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }

    fn pick_u64(&self, range: RangeInclusive<u64>) -> u64 {
        rand::thread_rng().gen_range(range)
    }

    fn pick_f64(&self, range: Range<f64>) -> f64 {
        if range.is_empty() {
            return range.start;
        }
        rand::thread_rng().gen_range(range)
    }
}

/// テスト用: 固定値を返す
///
/// `draw_unit` は常に同じ値、range 系は range の下端を返します。
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    unit: f64,
}

impl FixedEntropy {
    pub fn new(unit: f64) -> Self {
        Self { unit }
    }
}

impl Entropy for FixedEntropy {
    fn draw_unit(&self) -> f64 {
        self.unit
    }

    fn pick_u64(&self, range: RangeInclusive<u64>) -> u64 {
        *range.start()
    }

    fn pick_f64(&self, range: Range<f64>) -> f64 {
        range.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_entropy_draws_in_unit_interval() {
        let entropy = ThreadEntropy;
        for _ in 0..1000 {
            let v = entropy.draw_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn thread_entropy_respects_ranges() {
        let entropy = ThreadEntropy;
        for _ in 0..100 {
            let n = entropy.pick_u64(10..=20);
            assert!((10..=20).contains(&n));

            let f = entropy.pick_f64(0.5..2.0);
            assert!((0.5..2.0).contains(&f));
        }
    }

    #[test]
    fn fixed_entropy_is_deterministic() {
        let entropy = FixedEntropy::new(0.42);
        assert_eq!(entropy.draw_unit(), 0.42);
        assert_eq!(entropy.draw_unit(), 0.42);
        assert_eq!(entropy.pick_u64(100..=999), 100);
        assert_eq!(entropy.pick_f64(0.5..2.0), 0.5);
    }
}
