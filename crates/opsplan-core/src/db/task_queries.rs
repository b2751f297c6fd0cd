//! Task and action persistence: row fetch/insert/write-back plus the
//! task-level command executors.

use jiff::Timestamp;
use rusqlite::{params, Connection};

use crate::{
    error::{BoardError, DatabaseResultExt, Result},
    lifecycle,
    models::{ActionItem, ActionStatus, ActivityKind, Task, TaskStatus},
    params::{ActionSpec, TaskSpec, ToggleAction, UpdateTaskStatus},
};

use super::{activity_queries, plan_queries, utils};

const INSERT_TASK_SQL: &str = "INSERT INTO tasks (plan_id, title, status, assignee, due_time, \
     tradeoff, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const INSERT_ACTION_SQL: &str = "INSERT INTO actions (task_id, entity_kind, entity_name, \
     action_kind, target, status, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET status = ?1, started_at = ?2, completed_at = ?3, \
     updated_at = ?4 WHERE id = ?5";
const UPDATE_ACTION_SQL: &str =
    "UPDATE actions SET status = ?1, actual = ?2, applied_at = ?3 WHERE id = ?4";

/// Loads a plan's tasks in position order, with their actions attached.
pub(super) fn fetch_tasks(conn: &Connection, plan_id: u64) -> Result<Vec<Task>> {
    let query = format!(
        "SELECT {} FROM tasks WHERE plan_id = ?1 ORDER BY position",
        utils::TASK_COLUMNS
    );
    let mut stmt = conn
        .prepare(&query)
        .db_context("Failed to prepare task query")?;

    let mut tasks: Vec<Task> = stmt
        .query_map(params![plan_id as i64], utils::task_from_row)
        .map_err(|e| BoardError::database_error("Failed to query tasks", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| BoardError::database_error("Failed to fetch tasks", e))?;

    for task in &mut tasks {
        task.actions = fetch_actions(conn, task.id)?;
    }

    Ok(tasks)
}

/// Loads a task's actions in position order.
pub(super) fn fetch_actions(conn: &Connection, task_id: u64) -> Result<Vec<ActionItem>> {
    let query = format!(
        "SELECT {} FROM actions WHERE task_id = ?1 ORDER BY position",
        utils::ACTION_COLUMNS
    );
    let mut stmt = conn
        .prepare(&query)
        .db_context("Failed to prepare action query")?;

    let actions = stmt
        .query_map(params![task_id as i64], utils::action_from_row)
        .map_err(|e| BoardError::database_error("Failed to query actions", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| BoardError::database_error("Failed to fetch actions", e));
    actions
}

/// Inserts one task (status `todo`) and its nested actions (status
/// `pending`).
pub(super) fn insert_task(
    conn: &Connection,
    plan_id: u64,
    spec: &TaskSpec,
    position: u32,
    now: Timestamp,
) -> Result<u64> {
    let now_str = now.to_string();
    conn.execute(
        INSERT_TASK_SQL,
        params![
            plan_id as i64,
            spec.title,
            TaskStatus::Todo.as_str(),
            spec.assignee,
            spec.due_time.map(|t| t.to_string()),
            spec.tradeoff,
            position as i64,
            &now_str,
            &now_str,
        ],
    )
    .map_err(|e| BoardError::database_error("Failed to insert task", e))?;

    let task_id = conn.last_insert_rowid() as u64;

    for (index, action) in spec.actions.iter().enumerate() {
        insert_action(conn, task_id, action, index as u32)?;
    }

    Ok(task_id)
}

fn insert_action(
    conn: &Connection,
    task_id: u64,
    spec: &ActionSpec,
    position: u32,
) -> Result<u64> {
    conn.execute(
        INSERT_ACTION_SQL,
        params![
            task_id as i64,
            spec.entity_kind,
            spec.entity_name,
            spec.action_kind,
            spec.target,
            ActionStatus::Pending.as_str(),
            position as i64,
        ],
    )
    .map_err(|e| BoardError::database_error("Failed to insert action", e))?;

    Ok(conn.last_insert_rowid() as u64)
}

/// Writes back the mutable columns of a task row.
pub(super) fn persist_task(conn: &Connection, task: &Task) -> Result<()> {
    conn.execute(
        UPDATE_TASK_SQL,
        params![
            task.status.as_str(),
            task.started_at.map(|t| t.to_string()),
            task.completed_at.map(|t| t.to_string()),
            task.updated_at.to_string(),
            task.id as i64,
        ],
    )
    .map_err(|e| BoardError::database_error("Failed to update task", e))?;
    Ok(())
}

/// Writes back the mutable columns of an action row.
pub(super) fn persist_action(conn: &Connection, action: &ActionItem) -> Result<()> {
    conn.execute(
        UPDATE_ACTION_SQL,
        params![
            action.status.as_str(),
            action.actual,
            action.applied_at.map(|t| t.to_string()),
            action.id as i64,
        ],
    )
    .map_err(|e| BoardError::database_error("Failed to update action", e))?;
    Ok(())
}

impl super::Database {
    /// Transitions a task and recomputes the plan's progress, atomically.
    ///
    /// The transition itself is decided by [`lifecycle::task_fsm`]; a
    /// rejected transition rolls the transaction back untouched.
    pub fn update_task_status(
        &mut self,
        params: &UpdateTaskStatus,
        new_status: TaskStatus,
        now: Timestamp,
    ) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut plan = plan_queries::fetch_plan(&tx, params.plan_id)?
            .ok_or(BoardError::PlanNotFound { id: params.plan_id })?;

        if plan.is_terminal() {
            return Err(BoardError::invalid_transition(format!(
                "Plan {} is {} and no longer accepts task updates",
                plan.id,
                plan.status.as_str()
            )));
        }

        let task = plan
            .task_mut(params.task_id)
            .ok_or(BoardError::TaskNotFound { id: params.task_id })?;
        let previous = task.status;

        lifecycle::task_fsm::apply_status(task, new_status, now)?;
        let updated_task = task.clone();

        plan.progress = lifecycle::progress(&plan.tasks);
        plan.updated_at = now;

        persist_task(&tx, &updated_task)?;
        plan_queries::persist_plan_row(&tx, &plan)?;
        activity_queries::append_activity(
            &tx,
            plan.id,
            ActivityKind::StatusChange,
            &format!(
                "Task '{}' moved from {} to {}",
                updated_task.title,
                previous.as_str(),
                new_status.as_str()
            ),
            now,
        )?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(updated_task)
    }

    /// Flips one action between pending and applied, atomically.
    pub fn toggle_action(&mut self, params: &ToggleAction, now: Timestamp) -> Result<ActionItem> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut plan = plan_queries::fetch_plan(&tx, params.plan_id)?
            .ok_or(BoardError::PlanNotFound { id: params.plan_id })?;

        if plan.is_terminal() {
            return Err(BoardError::invalid_transition(format!(
                "Plan {} is {} and no longer accepts action updates",
                plan.id,
                plan.status.as_str()
            )));
        }

        let task = plan
            .task_mut(params.task_id)
            .ok_or(BoardError::TaskNotFound { id: params.task_id })?;

        lifecycle::task_fsm::toggle_action(task, params.action_id, now)?;
        let updated_task = task.clone();
        let updated_action = updated_task
            .actions
            .iter()
            .find(|a| a.id == params.action_id)
            .cloned()
            .ok_or(BoardError::ActionNotFound {
                id: params.action_id,
            })?;

        plan.updated_at = now;

        persist_action(&tx, &updated_action)?;
        persist_task(&tx, &updated_task)?;
        plan_queries::persist_plan_row(&tx, &plan)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(updated_action)
    }
}
