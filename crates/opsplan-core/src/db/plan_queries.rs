//! Plan CRUD operations and the plan-level command executors.

use jiff::{Span, Timestamp};
use rusqlite::{params, Connection, OptionalExtension};

use crate::{
    error::{BoardError, DatabaseResultExt, Result},
    lifecycle,
    models::{ActivityKind, Plan, PlanFilter, PlanStatus, StopReason, SuccessCriterion},
    params::{CompletePlan, CreatePlan, StopPlan},
};

use super::{activity_queries, task_queries, utils};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (name, status, priority, progress, \
     shift_context, created_by, target_completion, origin, projected_impact, \
     success_criteria, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const UPDATE_PLAN_SQL: &str = "UPDATE plans SET status = ?1, outcome = ?2, progress = ?3, \
     target_completion = ?4, success_criteria = ?5, stop_reason = ?6, stop_notes = ?7, \
     completion_notes = ?8, updated_at = ?9 WHERE id = ?10";
const DELETE_PLAN_ACTIONS_SQL: &str =
    "DELETE FROM actions WHERE task_id IN (SELECT id FROM tasks WHERE plan_id = ?1)";
const DELETE_PLAN_TASKS_SQL: &str = "DELETE FROM tasks WHERE plan_id = ?1";
const DELETE_PLAN_ACTIVITY_SQL: &str = "DELETE FROM activity WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

/// Retrieves a plan row by id with tasks and actions eagerly attached.
pub(super) fn fetch_plan(conn: &Connection, id: u64) -> Result<Option<Plan>> {
    let query = format!(
        "SELECT {} FROM plans WHERE id = ?1",
        utils::PLAN_COLUMNS
    );
    let mut stmt = conn
        .prepare(&query)
        .db_context("Failed to prepare plan query")?;

    let mut plan = stmt
        .query_row(params![id as i64], utils::plan_from_row)
        .optional()
        .map_err(|e| BoardError::database_error("Failed to query plan", e))?;

    if let Some(ref mut plan) = plan {
        plan.tasks = task_queries::fetch_tasks(conn, plan.id)?;
    }

    Ok(plan)
}

/// Writes back the mutable columns of a plan row.
pub(super) fn persist_plan_row(conn: &Connection, plan: &Plan) -> Result<()> {
    conn.execute(
        UPDATE_PLAN_SQL,
        params![
            plan.status.as_str(),
            plan.outcome.map(|o| o.as_str()),
            plan.progress as i64,
            plan.target_completion.map(|t| t.to_string()),
            utils::to_json(&plan.success_criteria)?,
            plan.stop_reason.map(|r| r.as_str()),
            plan.stop_notes,
            plan.completion_notes,
            plan.updated_at.to_string(),
            plan.id as i64,
        ],
    )
    .map_err(|e| BoardError::database_error("Failed to update plan", e))?;
    Ok(())
}

/// Inserts a full plan tree (plan row, tasks, actions) from a creation spec
/// and returns the new plan id.
///
/// Used both by the create command and by completion when materializing a
/// carryover draft; `activate_immediately` stamps the execution-horizon
/// target exactly as the execute command would.
pub(super) fn insert_plan_tree(
    conn: &Connection,
    spec: &CreatePlan,
    now: Timestamp,
) -> Result<u64> {
    let status = if spec.activate_immediately {
        PlanStatus::Active
    } else {
        PlanStatus::Draft
    };
    let target_completion = if spec.activate_immediately {
        Some(
            now.saturating_add(Span::new().hours(lifecycle::EXECUTION_HORIZON_HOURS))
                .expect("hour-only span arithmetic on a timestamp cannot fail"),
        )
    } else {
        None
    };
    let criteria: Vec<SuccessCriterion> = spec
        .success_criteria
        .iter()
        .map(|text| SuccessCriterion::new(text.clone()))
        .collect();

    let now_str = now.to_string();
    conn.execute(
        INSERT_PLAN_SQL,
        params![
            spec.name,
            status.as_str(),
            spec.priority.as_str(),
            0_i64,
            spec.shift_context,
            spec.created_by,
            target_completion.map(|t| t.to_string()),
            utils::to_opt_json(spec.origin.as_ref())?,
            utils::to_opt_json(spec.projected_impact.as_ref())?,
            utils::to_json(&criteria)?,
            &now_str,
            &now_str,
        ],
    )
    .map_err(|e| BoardError::database_error("Failed to insert plan", e))?;

    let plan_id = conn.last_insert_rowid() as u64;

    for (index, task) in spec.tasks.iter().enumerate() {
        task_queries::insert_task(conn, plan_id, task, index as u32, now)?;
    }

    Ok(plan_id)
}

impl super::Database {
    /// Creates a plan (and its nested tasks/actions) in one transaction.
    pub fn create_plan(&mut self, spec: &CreatePlan, now: Timestamp) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan_id = insert_plan_tree(&tx, spec, now)?;
        let plan =
            fetch_plan(&tx, plan_id)?.ok_or(BoardError::PlanNotFound { id: plan_id })?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(plan)
    }

    /// Retrieves a plan by its ID, with children.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        fetch_plan(&self.connection, id)
    }

    /// Lists plans matching the filter, newest first, with children.
    pub fn list_plans(&self, filter: &PlanFilter) -> Result<Vec<Plan>> {
        let mut query = format!("SELECT {} FROM plans", utils::PLAN_COLUMNS);

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(status) = filter.status {
            conditions.push("status = ?".to_string());
            params_vec.push(Box::new(status.as_str().to_string()));
        }

        if let Some(ref text) = filter.query {
            let pattern = format!("%{text}%");
            conditions.push("(name LIKE ? OR created_by LIKE ? OR shift_context LIKE ?)".to_string());
            params_vec.push(Box::new(pattern.clone()));
            params_vec.push(Box::new(pattern.clone()));
            params_vec.push(Box::new(pattern));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare plan list query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let mut plans: Vec<Plan> = stmt
            .query_map(&params_refs[..], utils::plan_from_row)
            .map_err(|e| BoardError::database_error("Failed to query plans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| BoardError::database_error("Failed to fetch plans", e))?;

        for plan in &mut plans {
            plan.tasks = task_queries::fetch_tasks(&self.connection, plan.id)?;
        }

        Ok(plans)
    }

    /// Permanently deletes a draft plan and everything under it.
    ///
    /// Only drafts can be discarded; executed plans keep their history and
    /// close through stop or complete instead. Returns the discarded plan.
    pub fn discard_draft(&mut self, id: u64) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = fetch_plan(&tx, id)?.ok_or(BoardError::PlanNotFound { id })?;

        if plan.status != PlanStatus::Draft {
            return Err(BoardError::invalid_transition(format!(
                "Plan {} is '{}'; only drafts can be discarded",
                plan.id,
                plan.status.as_str()
            )));
        }

        // Foreign keys cascade, but stay explicit about what goes.
        tx.execute(DELETE_PLAN_ACTIONS_SQL, params![id as i64])
            .map_err(|e| BoardError::database_error("Failed to delete plan actions", e))?;
        tx.execute(DELETE_PLAN_TASKS_SQL, params![id as i64])
            .map_err(|e| BoardError::database_error("Failed to delete plan tasks", e))?;
        tx.execute(DELETE_PLAN_ACTIVITY_SQL, params![id as i64])
            .map_err(|e| BoardError::database_error("Failed to delete plan activity", e))?;
        tx.execute(DELETE_PLAN_SQL, params![id as i64])
            .map_err(|e| BoardError::database_error("Failed to delete plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(plan)
    }

    /// Executes a draft plan: draft → active with the target horizon stamped.
    pub fn execute_draft(&mut self, id: u64, now: Timestamp) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut plan = fetch_plan(&tx, id)?.ok_or(BoardError::PlanNotFound { id })?;

        lifecycle::execute_draft(&mut plan, now)?;

        persist_plan_row(&tx, &plan)?;
        activity_queries::append_activity(
            &tx,
            plan.id,
            ActivityKind::StatusChange,
            "Plan executed",
            now,
        )?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(plan)
    }

    /// Stops an active plan early, recording the reason.
    pub fn stop_plan(
        &mut self,
        params: &StopPlan,
        reason: StopReason,
        now: Timestamp,
    ) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut plan =
            fetch_plan(&tx, params.plan_id)?.ok_or(BoardError::PlanNotFound { id: params.plan_id })?;

        let status = lifecycle::stop_plan(&mut plan, reason, params.notes.clone(), now)?;

        persist_plan_row(&tx, &plan)?;
        activity_queries::append_activity(
            &tx,
            plan.id,
            ActivityKind::StatusChange,
            &format!(
                "Plan stopped ({}), closed as {}",
                reason.as_str(),
                status.as_str()
            ),
            now,
        )?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(plan)
    }

    /// Completes an active plan and, for the follow-on and handoff
    /// dispositions, materializes the carryover draft in the same
    /// transaction. Returns the closed plan and the new draft, if any.
    pub fn complete_plan(
        &mut self,
        params: &CompletePlan,
        disposition: crate::models::Disposition,
        now: Timestamp,
    ) -> Result<(Plan, Option<Plan>)> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut plan =
            fetch_plan(&tx, params.plan_id)?.ok_or(BoardError::PlanNotFound { id: params.plan_id })?;

        let carryover_spec =
            lifecycle::resolve_completion(&mut plan, disposition, params.notes.clone(), now)?;

        persist_plan_row(&tx, &plan)?;
        for task in &plan.tasks {
            task_queries::persist_task(&tx, task)?;
        }

        let carryover = match carryover_spec {
            Some(spec) => {
                let draft_id = insert_plan_tree(&tx, &spec, now)?;
                Some(fetch_plan(&tx, draft_id)?.ok_or(BoardError::PlanNotFound { id: draft_id })?)
            }
            None => None,
        };

        let outcome = plan
            .outcome
            .map(|o| o.as_str())
            .unwrap_or("unknown");
        let message = match &carryover {
            Some(draft) => format!(
                "Plan completed ({}), carryover draft {} created",
                outcome, draft.id
            ),
            None => format!("Plan completed ({outcome})"),
        };
        activity_queries::append_activity(&tx, plan.id, ActivityKind::StatusChange, &message, now)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok((plan, carryover))
    }
}
