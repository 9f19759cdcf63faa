//! Workstation state controller — the session's task list and busy flag.

use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use tracing::{debug, info};

use crate::catalog;
use crate::config::WorkstationConfig;
use crate::error::WorkstationError;
use crate::gateway::AiGateway;
use crate::model::{TaskStatus, WorkTask};

use super::event::WorkstationEvent;

/// Default broadcast channel capacity.
const DEFAULT_BROADCAST_CAPACITY: usize = 256;

/// The goal the workstation's "new goal" control submits.
pub const DEFAULT_GOAL: &str = "帮我处理关于养老社区的咨询邮件";

#[derive(Debug, Default)]
struct State {
    tasks: Vec<WorkTask>,
    busy: bool,
}

/// Owns the authoritative in-memory task list.
///
/// Only two entry points mutate the list: [`submit_goal`](Self::submit_goal)
/// appends, [`toggle_status`](Self::toggle_status) flips one task. Each takes
/// the write lock once, so every change is applied to the list as a whole.
/// The lock is never held across the remote call.
pub struct Workstation {
    state: RwLock<State>,
    gateway: Arc<AiGateway>,
    config: WorkstationConfig,
    tx: broadcast::Sender<WorkstationEvent>,
}

impl Workstation {
    /// Create a workstation starting from `tasks`.
    pub fn new(
        gateway: Arc<AiGateway>,
        config: WorkstationConfig,
        tasks: Vec<WorkTask>,
    ) -> Arc<Self> {
        let (tx, _rx) = broadcast::channel(DEFAULT_BROADCAST_CAPACITY);
        Arc::new(Self {
            state: RwLock::new(State { tasks, busy: false }),
            gateway,
            config,
            tx,
        })
    }

    /// Create a workstation with the demo seed tasks.
    pub fn with_seed_tasks(gateway: Arc<AiGateway>, config: WorkstationConfig) -> Arc<Self> {
        Self::new(gateway, config, catalog::seed_tasks())
    }

    /// Subscribe to state change events.
    pub fn subscribe(&self) -> broadcast::Receiver<WorkstationEvent> {
        self.tx.subscribe()
    }

    /// Decompose `goal` and append the resulting tasks after all existing
    /// ones. Returns the appended tasks.
    ///
    /// Does not refuse while another submission is in flight; the busy flag
    /// is advisory for the triggering control.
    pub async fn submit_goal(&self, goal: &str) -> Vec<WorkTask> {
        self.set_busy(true).await;

        if !self.config.agent_think_delay.is_zero() {
            tokio::time::sleep(self.config.agent_think_delay).await;
        }

        let new_tasks = self.gateway.decompose_task(goal).await;

        let total = {
            let mut state = self.state.write().await;
            state.tasks.extend(new_tasks.iter().cloned());
            state.busy = false;
            state.tasks.len()
        };

        info!(added = new_tasks.len(), total = total, "Tasks appended to workstation");

        // Ok if no receivers are listening
        let _ = self.tx.send(WorkstationEvent::TasksAppended {
            tasks: new_tasks.clone(),
        });
        let _ = self.tx.send(WorkstationEvent::BusyChanged { busy: false });

        new_tasks
    }

    /// Flip a task between `completed` and `pending`. An `in-progress` task
    /// is left as it is. Returns the status after the toggle.
    pub async fn toggle_status(&self, id: &str) -> Result<TaskStatus, WorkstationError> {
        let mut state = self.state.write().await;

        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| WorkstationError::TaskNotFound { id: id.to_string() })?;

        let previous = task.status;
        task.status = previous.toggled();

        if task.status == previous {
            debug!(task_id = id, status = %previous, "Toggle left task unchanged");
            return Ok(previous);
        }

        info!(task_id = id, from = %previous, to = %task.status, "Task status toggled");

        let _ = self.tx.send(WorkstationEvent::TaskUpdated { task: task.clone() });

        Ok(task.status)
    }

    /// Percentage of completed tasks, rounded; 0 for an empty list.
    pub async fn efficiency(&self) -> u8 {
        efficiency(&self.state.read().await.tasks)
    }

    pub async fn completed_count(&self) -> usize {
        completed_count(&self.state.read().await.tasks)
    }

    /// Snapshot of the current list, in display order.
    pub async fn tasks(&self) -> Vec<WorkTask> {
        self.state.read().await.tasks.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.tasks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.tasks.is_empty()
    }

    /// Whether a goal submission is in flight.
    pub async fn is_busy(&self) -> bool {
        self.state.read().await.busy
    }

    async fn set_busy(&self, busy: bool) {
        self.state.write().await.busy = busy;
        let _ = self.tx.send(WorkstationEvent::BusyChanged { busy });
    }
}

fn completed_count(tasks: &[WorkTask]) -> usize {
    tasks.iter().filter(|t| t.status.is_completed()).count()
}

/// round(100 × completed / total), with halves rounding up; 0 when empty.
pub fn efficiency(tasks: &[WorkTask]) -> u8 {
    let total = tasks.len();
    if total == 0 {
        return 0;
    }
    let completed = completed_count(tasks);
    ((completed * 200 + total) / (total * 2)) as u8
}
