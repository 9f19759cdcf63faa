//! Change notifications for UI layers.

use serde::{Deserialize, Serialize};

use crate::model::WorkTask;

/// Broadcast after every workstation state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkstationEvent {
    /// The agent started or finished working on a goal.
    BusyChanged { busy: bool },
    /// Decomposed tasks were appended to the end of the list.
    TasksAppended { tasks: Vec<WorkTask> },
    /// A task's status changed.
    TaskUpdated { task: WorkTask },
}
