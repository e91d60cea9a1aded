//! Ports - 抽象化レイヤー
//!
//! 時刻・乱数・ID 生成など、テストで差し替えたい依存を trait として切り出します。
//! 本番実装はシステム時計と thread_rng、テストでは固定値を注入できます。

pub mod clock;
pub mod entropy;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::entropy::{Entropy, FixedEntropy, ThreadEntropy};
pub use self::id_generator::{IdGenerator, UlidGenerator};
