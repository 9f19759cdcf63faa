//! Work task model — the unit of human/agent collaboration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who carries out a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// Judgment, empathy, decisions, quality verification.
    Human,
    /// Data processing, drafting, search, computation.
    Agent,
}

impl TaskType {
    /// Normalize a model-supplied tag. Only the exact text `HUMAN` maps to
    /// `Human`; anything else, including a missing tag, is `Agent`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("HUMAN") => Self::Human,
            _ => Self::Agent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "HUMAN",
            Self::Agent => "AGENT",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Two-state toggle: `Completed` ↔ `Pending`. `InProgress` stays put.
    pub fn toggled(self) -> Self {
        match self {
            Self::Completed => Self::Pending,
            Self::Pending => Self::Completed,
            Self::InProgress => Self::InProgress,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A single task on the workstation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTask {
    /// Unique within a task list.
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub status: TaskStatus,
    /// Display-only time label, e.g. `10:05` or `Now`.
    pub timestamp: String,
}

impl WorkTask {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        task_type: TaskType,
        status: TaskStatus,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            task_type,
            status,
            timestamp: timestamp.into(),
        }
    }

    /// A fresh pending task with a generated id of the form `{prefix}-{uuid}`.
    pub fn pending(
        prefix: &str,
        content: impl Into<String>,
        task_type: TaskType,
        timestamp: impl Into<String>,
    ) -> Self {
        Self::new(
            format!("{prefix}-{}", Uuid::new_v4()),
            content,
            task_type,
            TaskStatus::Pending,
            timestamp,
        )
    }

    pub fn is_human(&self) -> bool {
        self.task_type == TaskType::Human
    }
}
