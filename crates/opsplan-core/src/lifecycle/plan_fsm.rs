//! Plan-level transitions: draft execution and early stop.

use jiff::{Span, Timestamp};

use super::EXECUTION_HORIZON_HOURS;
use crate::error::{BoardError, Result};
use crate::models::{Plan, PlanOutcome, PlanStatus, StopReason};

/// Moves a draft to `active` and stamps the display-only target completion
/// at `now` plus the fixed execution horizon.
///
/// Rejects with `InvalidTransition` from any other status, leaving the plan
/// unchanged.
pub fn execute_draft(plan: &mut Plan, now: Timestamp) -> Result<()> {
    if plan.status != PlanStatus::Draft {
        return Err(BoardError::invalid_transition(format!(
            "Plan {} cannot be executed from status '{}'",
            plan.id,
            plan.status.as_str()
        )));
    }

    plan.status = PlanStatus::Active;
    plan.target_completion = Some(
        now.saturating_add(Span::new().hours(EXECUTION_HORIZON_HOURS))
            .expect("hour-only span arithmetic on a timestamp cannot fail"),
    );
    plan.updated_at = now;
    Ok(())
}

/// Stops an active plan early.
///
/// The terminal status is `partial` when at least one task is done and
/// `abandoned` otherwise; the outcome always equals the new status. Whether
/// a single completed task should be enough for `partial` is an inherited
/// business rule, kept as-is. Tasks freeze in whatever status they hold.
pub fn stop_plan(
    plan: &mut Plan,
    reason: StopReason,
    notes: Option<String>,
    now: Timestamp,
) -> Result<PlanStatus> {
    if plan.status != PlanStatus::Active {
        return Err(BoardError::invalid_transition(format!(
            "Plan {} cannot be stopped from status '{}'",
            plan.id,
            plan.status.as_str()
        )));
    }

    let (status, outcome) = if plan.done_task_count() > 0 {
        (PlanStatus::Partial, PlanOutcome::Partial)
    } else {
        (PlanStatus::Abandoned, PlanOutcome::Abandoned)
    };

    plan.status = status;
    plan.outcome = Some(outcome);
    plan.stop_reason = Some(reason);
    plan.stop_notes = notes;
    plan.updated_at = now;
    Ok(status)
}
