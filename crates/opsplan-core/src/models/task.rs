//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ActionItem, ActionStatus, TaskStatus};

/// Metric snapshot around a single task, supplied by the external predictor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ImpactSnapshot {
    pub before: f64,
    pub after: f64,
}

/// Represents an individual work item within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the parent plan
    pub plan_id: u64,

    /// Brief title/summary of the task
    pub title: String,

    /// Current status of the task
    pub status: TaskStatus,

    /// Who the task is assigned to
    pub assignee: Option<String>,

    /// Display-only due time
    pub due_time: Option<Timestamp>,

    /// Set when the task first enters `in-progress`
    pub started_at: Option<Timestamp>,

    /// Set when the task is marked `done`
    pub completed_at: Option<Timestamp>,

    /// Discrete system changes tracked under this task
    #[serde(default)]
    pub actions: Vec<ActionItem>,

    /// Advisory text describing the cost of doing this task
    pub tradeoff: Option<String>,

    /// Optional before/after metric snapshot for this task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_impact: Option<ImpactSnapshot>,

    /// Order of the task within the plan (0-indexed)
    pub position: u32,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Task {
    /// Number of actions still pending on this task.
    pub fn pending_action_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| a.status == ActionStatus::Pending)
            .count()
    }

    /// Finds an action by id, mutably.
    pub fn action_mut(&mut self, action_id: u64) -> Option<&mut ActionItem> {
        self.actions.iter_mut().find(|a| a.id == action_id)
    }
}
