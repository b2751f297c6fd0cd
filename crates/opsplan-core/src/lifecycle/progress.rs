//! Plan progress derivation.

use crate::models::{Task, TaskStatus};

/// Returns a plan's completion percentage: `round(100 * done / total)`,
/// `0` when the task list is empty.
///
/// Pure and idempotent; callers recompute it after every task-status
/// mutation and before persisting the updated plan.
pub fn progress(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }

    let done = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Done)
        .count();

    ((done as f64 / tasks.len() as f64) * 100.0).round() as u8
}
