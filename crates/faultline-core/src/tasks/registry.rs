//! TaskRegistry - バックグラウンドタスクの起動と追跡
//!
//! レコード map は tokio::Mutex で保護された共有状態。start_task 側と
//! 完了コールバック側の両方が同じロックを通るので、lost update は起きない。
//! キャンセルは status を書き換えるだけで実行中の処理は止めない（既知の
//! 仕様上のギャップとして温存）。

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::capture::CaptureGateway;
use crate::domain::{FaultError, TaskId};
use crate::ports::{Clock, IdGenerator};
use crate::sim::Simulators;
use crate::tasks::{TaskArgs, TaskCounts, TaskKind, TaskRecord, TaskStatus, TaskStatusView};

pub struct TaskRegistry {
    records: Arc<Mutex<HashMap<TaskId, TaskRecord>>>,
    sims: Arc<Simulators>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    capture: Arc<dyn CaptureGateway>,
}

impl TaskRegistry {
    pub fn new(
        sims: Arc<Simulators>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        capture: Arc<dyn CaptureGateway>,
    ) -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            sims,
            ids,
            clock,
            capture,
        }
    }

    /// Parse the task name, insert a Pending record, and schedule detached
    /// execution. Unknown names fail here, before anything is spawned.
    pub async fn start_task(&self, name: &str, args: TaskArgs) -> Result<TaskId, FaultError> {
        let kind: TaskKind = name.parse()?;

        let id = self.ids.task_id();
        let record = TaskRecord::new(id, kind, args.clone(), self.clock.now());
        self.records.lock().await.insert(id, record);

        let records = Arc::clone(&self.records);
        let sims = Arc::clone(&self.sims);
        let capture = Arc::clone(&self.capture);
        tokio::spawn(async move {
            let outcome = kind.run(&sims, &args).await;

            let mut map = records.lock().await;
            // cleanup 済みならレコードは無い（結果は破棄）
            let Some(record) = map.get_mut(&id) else {
                return;
            };
            match outcome {
                Ok(report) => record.complete(report),
                Err(err) => {
                    // report-then-record: 記録より先に capture へ報告する
                    capture.report_exception(&err);
                    record.fail(err.to_string());
                }
            }
        });

        Ok(id)
    }

    pub async fn get_task_status(&self, id: TaskId) -> Result<TaskStatusView, FaultError> {
        let map = self.records.lock().await;
        map.get(&id)
            .map(TaskRecord::view)
            .ok_or_else(|| Self::not_found(id))
    }

    /// Flip the record to Cancelled. Does not interrupt in-flight work.
    pub async fn cancel_task(&self, id: TaskId) -> Result<TaskStatusView, FaultError> {
        let mut map = self.records.lock().await;
        let record = map.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        record.cancel();
        Ok(record.view())
    }

    /// Remove every record in a terminal state; returns how many were removed.
    pub async fn cleanup_completed_tasks(&self) -> usize {
        let mut map = self.records.lock().await;
        let before = map.len();
        map.retain(|_, record| !record.status.is_terminal());
        before - map.len()
    }

    pub async fn counts(&self) -> TaskCounts {
        let map = self.records.lock().await;
        let mut counts = TaskCounts::default();
        for record in map.values() {
            match record.status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::Failed => counts.failed += 1,
                TaskStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    fn not_found(id: TaskId) -> FaultError {
        FaultError::NotFound(format!("Task {id} not found"))
    }
}
