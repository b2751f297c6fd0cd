//! Plan model definition and related functionality.

use std::collections::BTreeMap;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanOutcome, PlanStatus, Priority, StopReason, SuccessCriterion, Task, TaskStatus};

/// Back-reference to whatever spawned a plan: a triggering alert or, for
/// derivative drafts, the completed source plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanOrigin {
    /// Kind of the originating entity
    pub kind: OriginKind,
    /// Identifier or title of the originating alert/plan, stored verbatim
    pub source: String,
}

/// Kind discriminator for [`PlanOrigin`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OriginKind {
    /// Spawned from an alert in the feed
    Alert,
    /// Carryover draft for the same owner
    FollowOn,
    /// Carryover draft reassigned to the next shift
    Handoff,
}

impl OriginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginKind::Alert => "alert",
            OriginKind::FollowOn => "follow-on",
            OriginKind::Handoff => "handoff",
        }
    }
}

impl FromStr for OriginKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alert" => Ok(OriginKind::Alert),
            "follow-on" | "follow_on" => Ok(OriginKind::FollowOn),
            "handoff" => Ok(OriginKind::Handoff),
            _ => Err(format!("Invalid origin kind: {s}")),
        }
    }
}

/// Predicted effect of a plan on one score category, supplied by the
/// external predictor. The delta is derived, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ImpactProjection {
    /// Current score for the category
    pub base: f64,
    /// Predicted score once the plan is executed
    pub projected: f64,
}

impl ImpactProjection {
    /// Projected minus base.
    pub fn delta(&self) -> f64 {
        self.projected - self.base
    }
}

/// Represents a complete operational plan with metadata, tasks and criteria.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Name of the plan
    pub name: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: PlanStatus,

    /// Terminal outcome; set exactly once when the plan closes
    pub outcome: Option<PlanOutcome>,

    /// Priority of the intervention
    #[serde(default)]
    pub priority: Priority,

    /// Completion percentage derived from task statuses (0-100)
    pub progress: u8,

    /// Shift the plan belongs to (e.g. "day", "night")
    pub shift_context: String,

    /// Who authored the plan
    pub created_by: String,

    /// Display-only target time; not enforced by any command
    pub target_completion: Option<Timestamp>,

    /// Plan-level pass/fail statements judged by the live system
    #[serde(default)]
    pub success_criteria: Vec<SuccessCriterion>,

    /// Ordered work items
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// What spawned this plan, if anything
    pub origin: Option<PlanOrigin>,

    /// Predictor-supplied score projections keyed by category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_impact: Option<BTreeMap<String, ImpactProjection>>,

    /// Reason recorded by the stop command
    pub stop_reason: Option<StopReason>,

    /// Free-text notes recorded by the stop command
    pub stop_notes: Option<String>,

    /// Free-text notes recorded by the complete command
    pub completion_notes: Option<String>,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Plan {
    /// Number of tasks in status `done`.
    pub fn done_task_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .count()
    }

    /// Terminal plans accept no further commands.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Finds a task by id.
    pub fn task(&self, task_id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Finds a task by id, mutably.
    pub fn task_mut(&mut self, task_id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }
}
