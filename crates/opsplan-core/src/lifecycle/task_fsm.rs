//! Task state machine: todo → in-progress → done, with the out-of-band
//! terminal `incomplete` reachable only via plan closure.

use jiff::Timestamp;

use crate::error::{BoardError, Result};
use crate::models::{ActionStatus, Task, TaskStatus};

/// Starts a task: `todo` → `in-progress`, stamping `started_at`.
///
/// Rejects with `InvalidTransition` from any other status.
pub fn start(task: &mut Task, now: Timestamp) -> Result<()> {
    if task.status != TaskStatus::Todo {
        return Err(BoardError::invalid_transition(format!(
            "Task {} cannot start from status '{}'",
            task.id,
            task.status.as_str()
        )));
    }

    task.status = TaskStatus::InProgress;
    task.started_at = Some(now);
    task.updated_at = now;
    Ok(())
}

/// Completes a task, stamping `completed_at`.
///
/// Legal from `in-progress`, or from `todo` as an implicit
/// start-then-complete (both timestamps stamped with the same instant).
pub fn complete(task: &mut Task, now: Timestamp) -> Result<()> {
    match task.status {
        TaskStatus::InProgress => {}
        TaskStatus::Todo => {
            task.started_at = Some(now);
        }
        other => {
            return Err(BoardError::invalid_transition(format!(
                "Task {} cannot complete from status '{}'",
                task.id,
                other.as_str()
            )));
        }
    }

    task.status = TaskStatus::Done;
    task.completed_at = Some(now);
    task.updated_at = now;
    Ok(())
}

/// Applies a requested user transition to a task.
///
/// Dispatcher for the update-task-status command. `incomplete` is filtered
/// out during parameter validation and rejected again here; requesting the
/// status the task already has is rejected rather than treated as a no-op,
/// and there is no path backwards out of `in-progress` or `done`.
pub fn apply_status(task: &mut Task, new_status: TaskStatus, now: Timestamp) -> Result<()> {
    match new_status {
        TaskStatus::InProgress => start(task, now),
        TaskStatus::Done => complete(task, now),
        TaskStatus::Todo => Err(BoardError::invalid_transition(format!(
            "Task {} cannot return to 'todo' from '{}'",
            task.id,
            task.status.as_str()
        ))),
        TaskStatus::Incomplete => Err(BoardError::invalid_transition(
            "Tasks become incomplete only when their plan closes",
        )),
    }
}

/// Flips one action between `pending` and `applied`.
///
/// Legal only while the owning task is editable (`todo` or `in-progress`).
/// Applying stamps `actual = target` and `applied_at = now`; reverting
/// clears both, so two consecutive toggles restore the prior state exactly.
pub fn toggle_action(task: &mut Task, action_id: u64, now: Timestamp) -> Result<()> {
    if !task.status.is_editable() {
        return Err(BoardError::invalid_transition(format!(
            "Actions on task {} are frozen in status '{}'",
            task.id,
            task.status.as_str()
        )));
    }

    let action = task
        .action_mut(action_id)
        .ok_or(BoardError::ActionNotFound { id: action_id })?;

    match action.status {
        ActionStatus::Pending => {
            action.status = ActionStatus::Applied;
            action.actual = Some(action.target.clone());
            action.applied_at = Some(now);
        }
        ActionStatus::Applied => {
            action.status = ActionStatus::Pending;
            action.actual = None;
            action.applied_at = None;
        }
    }

    task.updated_at = now;
    Ok(())
}
