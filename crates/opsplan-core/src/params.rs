//! Parameter structures for board operations.
//!
//! Shared parameter structures usable across interfaces (CLI, future HTTP
//! surface) without framework-specific derives. Interface layers wrap these
//! with their own derives (clap args, request types) and convert via `From`,
//! keeping the core free of UI framework dependencies.
//!
//! Status-bearing parameters carry raw strings and expose a `validate()`
//! method that parses them into the typed enums, so rejection happens before
//! any command touches the store.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::models::{Disposition, ImpactProjection, PlanOrigin, Priority, StopReason, TaskStatus};

/// Generic parameters for operations requiring just a plan ID.
///
/// Used for show_plan, execute_draft, discard_draft and get_activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Specification for one action nested under a task being created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionSpec {
    /// Kind of the entity being changed (e.g. "station")
    pub entity_kind: String,
    /// Name of the entity being changed
    pub entity_name: String,
    /// Kind of change (e.g. "reassign")
    pub action_kind: String,
    /// Value the change should move the entity to
    pub target: String,
}

/// Specification for one task nested under a plan being created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Title of the task (required)
    pub title: String,
    /// Optional assignee
    pub assignee: Option<String>,
    /// Optional display-only due time (RFC 3339)
    pub due_time: Option<jiff::Timestamp>,
    /// Optional advisory tradeoff text
    pub tradeoff: Option<String>,
    /// Actions created with the task, in order
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Name of the plan (required, non-empty)
    pub name: String,
    /// Priority of the intervention
    #[serde(default)]
    pub priority: Priority,
    /// Shift the plan belongs to
    #[serde(default)]
    pub shift_context: String,
    /// Who is authoring the plan
    #[serde(default)]
    pub created_by: String,
    /// Create directly in `active` status with a target completion horizon
    #[serde(default)]
    pub activate_immediately: bool,
    /// What spawned this plan, if anything
    pub origin: Option<PlanOrigin>,
    /// Predictor-supplied score projections keyed by category, stored
    /// verbatim
    pub projected_impact: Option<BTreeMap<String, ImpactProjection>>,
    /// Success criteria texts, created unmet
    #[serde(default)]
    pub success_criteria: Vec<String>,
    /// Tasks created with the plan, in order
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl CreatePlan {
    /// Rejects creation requests without a usable name.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BoardError::missing_field(
                "name",
                "A plan requires a non-empty name",
            ));
        }
        Ok(())
    }
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Restrict to one plan status ('draft', 'active', ...)
    pub status: Option<String>,
    /// Free-text match over name, creator and shift context
    pub query: Option<String>,
}

/// Parameters for changing a task's status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskStatus {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the task to transition
    pub task_id: u64,
    /// New status ('todo', 'in-progress' or 'done')
    pub status: String,
}

impl UpdateTaskStatus {
    /// Parse and validate the requested status.
    ///
    /// `incomplete` parses as a valid status but is never a legal target for
    /// a user transition; it is applied only by the completion resolver.
    ///
    /// # Errors
    ///
    /// * `BoardError::InvalidInput` - when the status string is unknown
    /// * `BoardError::InvalidTransition` - when `incomplete` is requested
    pub fn validate(&self) -> Result<TaskStatus> {
        let status =
            TaskStatus::from_str(&self.status).map_err(|reason| BoardError::InvalidInput {
                field: "status".to_string(),
                reason,
            })?;

        if status == TaskStatus::Incomplete {
            return Err(BoardError::invalid_transition(
                "Tasks become incomplete only when their plan closes",
            ));
        }

        Ok(status)
    }
}

/// Parameters for toggling an action between pending and applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleAction {
    /// ID of the owning plan
    pub plan_id: u64,
    /// ID of the owning task
    pub task_id: u64,
    /// ID of the action to flip
    pub action_id: u64,
}

/// Parameters for appending a comment to a plan's activity log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddComment {
    /// ID of the plan to comment on
    pub plan_id: u64,
    /// Comment body (required, non-empty)
    pub text: String,
}

impl AddComment {
    /// Rejects empty comments.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(BoardError::missing_field(
                "text",
                "A comment requires non-empty text",
            ));
        }
        Ok(())
    }
}

/// Parameters for stopping an active plan early.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopPlan {
    /// ID of the plan to stop
    pub plan_id: u64,
    /// Why the plan is being stopped ('changed', 'not-working', 'priority',
    /// 'conflict' or 'other')
    pub reason: String,
    /// Optional free-text notes
    pub notes: Option<String>,
}

impl StopPlan {
    /// Parse and validate the stop reason.
    ///
    /// # Errors
    ///
    /// * `BoardError::MissingField` - when the reason is absent/empty
    /// * `BoardError::InvalidInput` - when the reason string is unknown
    pub fn validate(&self) -> Result<StopReason> {
        if self.reason.trim().is_empty() {
            return Err(BoardError::missing_field(
                "reason",
                "Stopping a plan requires a reason",
            ));
        }
        StopReason::from_str(&self.reason).map_err(|reason| BoardError::InvalidInput {
            field: "reason".to_string(),
            reason,
        })
    }
}

/// Parameters for completing an active plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletePlan {
    /// ID of the plan to complete
    pub plan_id: u64,
    /// How unfinished work should be handled ('complete', 'follow-on',
    /// 'handoff' or 'close')
    pub disposition: String,
    /// Optional free-text notes
    pub notes: Option<String>,
}

impl CompletePlan {
    /// Parse and validate the disposition.
    pub fn validate(&self) -> Result<Disposition> {
        if self.disposition.trim().is_empty() {
            return Err(BoardError::missing_field(
                "disposition",
                "Completing a plan requires a disposition",
            ));
        }
        Disposition::from_str(&self.disposition).map_err(|reason| BoardError::InvalidInput {
            field: "disposition".to_string(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_plan_validate_rejects_blank_name() {
        let params = CreatePlan {
            name: "   ".to_string(),
            ..Default::default()
        };

        match params.validate().unwrap_err() {
            BoardError::MissingField { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_update_task_status_validate_accepts_known_statuses() {
        for (raw, expected) in [
            ("todo", TaskStatus::Todo),
            ("in-progress", TaskStatus::InProgress),
            ("in_progress", TaskStatus::InProgress),
            ("done", TaskStatus::Done),
        ] {
            let params = UpdateTaskStatus {
                plan_id: 1,
                task_id: 1,
                status: raw.to_string(),
            };
            assert_eq!(params.validate().unwrap(), expected);
        }
    }

    #[test]
    fn test_update_task_status_validate_rejects_incomplete_target() {
        let params = UpdateTaskStatus {
            plan_id: 1,
            task_id: 1,
            status: "incomplete".to_string(),
        };

        assert!(matches!(
            params.validate().unwrap_err(),
            BoardError::InvalidTransition { .. }
        ));
    }

    #[test]
    fn test_update_task_status_validate_rejects_unknown_status() {
        let params = UpdateTaskStatus {
            plan_id: 1,
            task_id: 1,
            status: "blocked".to_string(),
        };

        match params.validate().unwrap_err() {
            BoardError::InvalidInput { field, reason } => {
                assert_eq!(field, "status");
                assert!(reason.contains("blocked"));
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_stop_plan_validate_requires_reason() {
        let params = StopPlan {
            plan_id: 1,
            reason: String::new(),
            notes: None,
        };

        match params.validate().unwrap_err() {
            BoardError::MissingField { field, .. } => assert_eq!(field, "reason"),
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_stop_plan_validate_parses_fixed_enumeration() {
        for (raw, expected) in [
            ("changed", StopReason::Changed),
            ("not-working", StopReason::NotWorking),
            ("priority", StopReason::Priority),
            ("conflict", StopReason::Conflict),
            ("other", StopReason::Other),
        ] {
            let params = StopPlan {
                plan_id: 1,
                reason: raw.to_string(),
                notes: None,
            };
            assert_eq!(params.validate().unwrap(), expected);
        }
    }

    #[test]
    fn test_complete_plan_validate_parses_disposition() {
        for (raw, expected) in [
            ("complete", Disposition::Complete),
            ("follow-on", Disposition::FollowOn),
            ("handoff", Disposition::Handoff),
            ("close", Disposition::Close),
        ] {
            let params = CompletePlan {
                plan_id: 1,
                disposition: raw.to_string(),
                notes: None,
            };
            assert_eq!(params.validate().unwrap(), expected);
        }
    }

    #[test]
    fn test_add_comment_validate_rejects_empty_text() {
        let params = AddComment {
            plan_id: 1,
            text: String::new(),
        };

        match params.validate().unwrap_err() {
            BoardError::MissingField { field, .. } => assert_eq!(field, "text"),
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }
}
