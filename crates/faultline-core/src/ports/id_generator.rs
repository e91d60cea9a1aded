//! IdGenerator port - ID 生成の抽象化
//!
//! タスク ID は ULID ベース。Clock を注入することで、テスト時に
//! timestamp 部分を決定的にできます（ランダム部分は残ります）。

use ulid::Ulid;

use crate::domain::TaskId;
use crate::ports::Clock;

/// IdGenerator はレジストリが払い出す opaque な ID を生成
pub trait IdGenerator: Send + Sync {
    fn task_id(&self) -> TaskId;
}

/// UlidGenerator は ULID ベースの ID 生成器
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        TaskId::from(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn generates_unique_ids() {
        let id_gen = UlidGenerator::new(SystemClock);

        let id1 = id_gen.task_id();
        let id2 = id_gen.task_id();

        assert_ne!(id1, id2);
    }

    #[test]
    fn fixed_clock_fixes_timestamp_part() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidGenerator::new(FixedClock::new(fixed_time));

        let id1 = id_gen.task_id();
        let id2 = id_gen.task_id();

        // ランダム部分があるので ID 自体は異なる
        assert_ne!(id1, id2);

        // timestamp 部分は固定時刻と一致する
        assert_eq!(id1.as_ulid().timestamp_ms(), id2.as_ulid().timestamp_ms());
        assert_eq!(
            id1.as_ulid().timestamp_ms(),
            fixed_time.timestamp_millis() as u64
        );
    }
}
