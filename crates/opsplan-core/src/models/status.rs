//! Status and policy enumerations for plans, tasks and actions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan statuses.
///
/// `PendingApproval` exists in upstream dashboard data and is carried
/// faithfully, but no command produces it; lifecycle checks treat it as
/// non-terminal and non-active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStatus {
    /// Plan is authored but not yet executing
    #[default]
    Draft,

    /// Plan is executing
    Active,

    /// Plan is awaiting sign-off before execution
    PendingApproval,

    /// Plan ran to completion (terminal)
    Completed,

    /// Plan was stopped with at least one completed task (terminal)
    Partial,

    /// Plan was stopped with no completed tasks (terminal)
    Abandoned,
}

impl PlanStatus {
    /// Terminal plans accept no further commands.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PlanStatus::Completed | PlanStatus::Partial | PlanStatus::Abandoned
        )
    }

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Draft => "draft",
            PlanStatus::Active => "active",
            PlanStatus::PendingApproval => "pending-approval",
            PlanStatus::Completed => "completed",
            PlanStatus::Partial => "partial",
            PlanStatus::Abandoned => "abandoned",
        }
    }
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PlanStatus::Draft),
            "active" => Ok(PlanStatus::Active),
            "pending-approval" | "pending_approval" => Ok(PlanStatus::PendingApproval),
            "completed" => Ok(PlanStatus::Completed),
            "partial" => Ok(PlanStatus::Partial),
            "abandoned" => Ok(PlanStatus::Abandoned),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

/// Terminal outcome recorded when a plan closes.
///
/// Set exactly once, when status becomes one of the terminal states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlanOutcome {
    /// All tasks done, all actions applied, all criteria met
    Success,

    /// Completed or stopped with unfinished work
    Partial,

    /// Stopped before any task finished
    Abandoned,

    /// Replaced by another plan
    Superseded,
}

impl PlanOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanOutcome::Success => "success",
            PlanOutcome::Partial => "partial",
            PlanOutcome::Abandoned => "abandoned",
            PlanOutcome::Superseded => "superseded",
        }
    }
}

impl FromStr for PlanOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(PlanOutcome::Success),
            "partial" => Ok(PlanOutcome::Partial),
            "abandoned" => Ok(PlanOutcome::Abandoned),
            "superseded" => Ok(PlanOutcome::Superseded),
            _ => Err(format!("Invalid plan outcome: {s}")),
        }
    }
}

/// Plan priority as shown on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[default]
    Normal,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

/// Type-safe enumeration of task statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has not started
    #[default]
    Todo,

    /// Task is being worked on
    InProgress,

    /// Task has been completed
    Done,

    /// Task was still open when its plan closed. Applied only by the
    /// completion resolver, never by a direct user transition.
    Incomplete,
}

impl TaskStatus {
    /// A task's status and actions may only change while it is editable.
    pub fn is_editable(&self) -> bool {
        matches!(self, TaskStatus::Todo | TaskStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
            TaskStatus::Incomplete => "incomplete",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// - `✓ Done` - Checkmark for completed tasks
    /// - `➤ In Progress` - Arrow for active tasks
    /// - `○ Todo` - Circle for pending tasks
    /// - `⊘ Incomplete` - Slashed circle for tasks frozen at plan closure
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Done => "✓ Done",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::Todo => "○ Todo",
            TaskStatus::Incomplete => "⊘ Incomplete",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" | "inprogress" | "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            "incomplete" => Ok(TaskStatus::Incomplete),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

/// Status of a discrete system change within a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    /// Change has not been made yet
    #[default]
    Pending,

    /// Change has been applied to the live system
    Applied,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Pending => "pending",
            ActionStatus::Applied => "applied",
        }
    }
}

impl FromStr for ActionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ActionStatus::Pending),
            "applied" => Ok(ActionStatus::Applied),
            _ => Err(format!("Invalid action status: {s}")),
        }
    }
}

/// Fixed enumeration of reasons accepted by the stop command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    /// Conditions changed and the plan no longer applies
    Changed,
    /// The intervention is not producing the expected effect
    NotWorking,
    /// A higher-priority issue displaced this plan
    Priority,
    /// The plan conflicts with another intervention
    Conflict,
    Other,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::Changed => "changed",
            StopReason::NotWorking => "not-working",
            StopReason::Priority => "priority",
            StopReason::Conflict => "conflict",
            StopReason::Other => "other",
        }
    }
}

impl FromStr for StopReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "changed" => Ok(StopReason::Changed),
            "not-working" | "not_working" | "notworking" => Ok(StopReason::NotWorking),
            "priority" => Ok(StopReason::Priority),
            "conflict" => Ok(StopReason::Conflict),
            "other" => Ok(StopReason::Other),
            _ => Err(format!("Invalid stop reason: {s}")),
        }
    }
}

/// How unfinished work should be handled when completing a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Disposition {
    /// Close with nothing left over; rejected while incomplete work remains
    Complete,
    /// Carry unfinished work into a new draft for the same owner
    FollowOn,
    /// Carry unfinished work into a new draft for the next shift
    Handoff,
    /// Close and drop the unfinished work
    Close,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Complete => "complete",
            Disposition::FollowOn => "follow-on",
            Disposition::Handoff => "handoff",
            Disposition::Close => "close",
        }
    }
}

impl FromStr for Disposition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "complete" => Ok(Disposition::Complete),
            "follow-on" | "follow_on" | "followon" => Ok(Disposition::FollowOn),
            "handoff" => Ok(Disposition::Handoff),
            "close" => Ok(Disposition::Close),
            _ => Err(format!("Invalid disposition: {s}")),
        }
    }
}
