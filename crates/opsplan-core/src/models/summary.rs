//! Plan summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanOutcome, PlanStatus, Priority, TaskStatus};

/// Summary information about a plan with task statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Name of the plan
    pub name: String,
    /// Plan status
    pub status: PlanStatus,
    /// Terminal outcome, if closed
    pub outcome: Option<PlanOutcome>,
    /// Priority of the intervention
    pub priority: Priority,
    /// Completion percentage (0-100)
    pub progress: u8,
    /// Shift the plan belongs to
    pub shift_context: String,
    /// Who authored the plan
    pub created_by: String,
    /// Total number of tasks
    pub total_tasks: u32,
    /// Number of done tasks
    pub done_tasks: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        let total_tasks = plan.tasks.len() as u32;
        let done_tasks = plan
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Done)
            .count() as u32;

        Self {
            id: plan.id,
            name: plan.name.clone(),
            status: plan.status,
            outcome: plan.outcome,
            priority: plan.priority,
            progress: plan.progress,
            shift_context: plan.shift_context.clone(),
            created_by: plan.created_by.clone(),
            total_tasks,
            done_tasks,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}
