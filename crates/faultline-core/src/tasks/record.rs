//! Task record: metadata + lifecycle state machine.
//!
//! State transitions:
//! - Pending -> Completed (async success)
//! - Pending -> Failed (async failure)
//! - any -> Cancelled (external request; does NOT stop in-flight work)
//!
//! Terminal states (Completed / Failed / Cancelled) are only left via
//! deletion. A completion that arrives after cancellation is dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{SimulationReport, TaskId};
use crate::tasks::{TaskArgs, TaskKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl TaskStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Failed | TaskStatus::Cancelled
        )
    }
}

/// Single source of truth for one background task.
///
/// Owned exclusively by the registry; callers only ever hold the id.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: TaskId,
    pub kind: TaskKind,
    pub args: TaskArgs,
    pub started_at: DateTime<Utc>,
    pub status: TaskStatus,
    pub result: Option<SimulationReport>,
    pub error: Option<String>,
}

impl TaskRecord {
    pub fn new(id: TaskId, kind: TaskKind, args: TaskArgs, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind,
            args,
            started_at,
            status: TaskStatus::Pending,
            result: None,
            error: None,
        }
    }

    /// Async success. Ignored if the record already reached a terminal state
    /// (e.g. cancelled while running).
    pub fn complete(&mut self, report: SimulationReport) {
        if self.status != TaskStatus::Pending {
            return;
        }
        self.status = TaskStatus::Completed;
        self.result = Some(report);
    }

    /// Async failure. Same terminal-state rule as `complete`.
    pub fn fail(&mut self, error: impl Into<String>) {
        if self.status != TaskStatus::Pending {
            return;
        }
        self.status = TaskStatus::Failed;
        self.error = Some(error.into());
    }

    /// Unconditional cancellation flag. In-flight execution keeps running;
    /// only the recorded status changes.
    pub fn cancel(&mut self) {
        self.status = TaskStatus::Cancelled;
    }

    pub fn view(&self) -> TaskStatusView {
        TaskStatusView {
            task_id: self.id,
            status: self.status,
            result: self.result.clone(),
            error: self.error.clone(),
        }
    }
}

/// Serializable status view for callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatusView {
    pub task_id: TaskId,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<SimulationReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Per-status counts for observability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub pending: usize,
    pub completed: usize,
    pub failed: usize,
    pub cancelled: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;
    use ulid::Ulid;

    fn record() -> TaskRecord {
        TaskRecord::new(
            TaskId::from_ulid(Ulid::new()),
            TaskKind::SendEmail,
            TaskArgs::default(),
            Utc::now(),
        )
    }

    #[test]
    fn new_record_is_pending() {
        let rec = record();
        assert_eq!(rec.status, TaskStatus::Pending);
        assert!(rec.result.is_none());
        assert!(rec.error.is_none());
    }

    #[test]
    fn complete_sets_result() {
        let mut rec = record();
        rec.complete(SimulationReport::success(Utc::now()));

        assert_eq!(rec.status, TaskStatus::Completed);
        assert!(rec.result.is_some());
        assert!(rec.error.is_none());
    }

    #[test]
    fn fail_sets_error() {
        let mut rec = record();
        rec.fail("boom");

        assert_eq!(rec.status, TaskStatus::Failed);
        assert_eq!(rec.error.as_deref(), Some("boom"));
        assert!(rec.result.is_none());
    }

    #[rstest]
    #[case::from_pending(TaskStatus::Pending)]
    #[case::from_completed(TaskStatus::Completed)]
    #[case::from_failed(TaskStatus::Failed)]
    fn cancel_overrides_any_state(#[case] start: TaskStatus) {
        let mut rec = record();
        rec.status = start;

        rec.cancel();
        assert_eq!(rec.status, TaskStatus::Cancelled);
    }

    #[test]
    fn late_completion_does_not_resurrect_a_cancelled_task() {
        let mut rec = record();
        rec.cancel();

        rec.complete(SimulationReport::success(Utc::now()));
        assert_eq!(rec.status, TaskStatus::Cancelled);
        assert!(rec.result.is_none());

        rec.fail("too late");
        assert_eq!(rec.status, TaskStatus::Cancelled);
        assert!(rec.error.is_none());
    }

    #[test]
    fn terminal_states_are_classified() {
        assert!(!TaskStatus::Pending.is_terminal());
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Failed.is_terminal());
        assert!(TaskStatus::Cancelled.is_terminal());
    }
}
