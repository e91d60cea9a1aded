//! Task kinds: the closed set of operations the registry can run.
//!
//! Dispatch is a tagged enum resolved at compile time; an unknown task *name*
//! fails fast at parse time, before anything is scheduled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{FaultError, SimulationReport};
use crate::sim::Simulators;

/// The five background operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    SendEmail,
    CleanupData,
    ProcessDataset,
    GenerateReport,
    SyncData,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::SendEmail,
        TaskKind::CleanupData,
        TaskKind::ProcessDataset,
        TaskKind::GenerateReport,
        TaskKind::SyncData,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::SendEmail => "send_email",
            TaskKind::CleanupData => "cleanup_data",
            TaskKind::ProcessDataset => "process_dataset",
            TaskKind::GenerateReport => "generate_report",
            TaskKind::SyncData => "sync_data",
        }
    }

    /// Execute this kind against the simulators with the given arguments.
    pub async fn run(
        self,
        sims: &Simulators,
        args: &TaskArgs,
    ) -> Result<SimulationReport, FaultError> {
        match self {
            TaskKind::SendEmail => {
                sims.send_email(
                    args.email.as_deref().unwrap_or("user@example.com"),
                    args.subject.as_deref().unwrap_or("(no subject)"),
                    args.body.as_deref().unwrap_or(""),
                )
                .await
            }
            TaskKind::CleanupData => {
                sims.cleanup_old_data(
                    args.data_type.as_deref().unwrap_or("logs"),
                    args.older_than_days.unwrap_or(30),
                )
                .await
            }
            TaskKind::ProcessDataset => {
                sims.process_large_dataset(args.dataset_id.as_deref().unwrap_or("default"))
                    .await
            }
            TaskKind::GenerateReport => {
                let data = [json!({ "filters": args.filters })];
                sims.generate_report(&data, args.report_type.as_deref().unwrap_or("summary"))
                    .await
            }
            TaskKind::SyncData => {
                sims.sync_external_data(args.sync_type.as_deref().unwrap_or("full"))
                    .await
            }
        }
    }
}

impl FromStr for TaskKind {
    type Err = FaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "send_email" => Ok(TaskKind::SendEmail),
            "cleanup_data" => Ok(TaskKind::CleanupData),
            "process_dataset" => Ok(TaskKind::ProcessDataset),
            "generate_report" => Ok(TaskKind::GenerateReport),
            "sync_data" => Ok(TaskKind::SyncData),
            other => Err(FaultError::Generic(format!("Unknown task: {other}"))),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arguments shared by the task kinds; unused fields are simply ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskArgs {
    pub email: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub data_type: Option<String>,
    pub older_than_days: Option<i64>,
    pub dataset_id: Option<String>,
    pub report_type: Option<String>,
    pub filters: Option<serde_json::Value>,
    pub sync_type: Option<String>,
}
