//! Plan-level commands and queries for the Board.
//!
//! Each command validates its parameters up front, reads the clock once and
//! runs the storage work on the blocking pool. Timestamps are decided here
//! so one command stamps one instant everywhere it writes.

use jiff::Timestamp;
use log::info;
use tokio::task;

use super::{Board, CompletionOutcome};
use crate::{
    db::Database,
    error::{BoardError, Result},
    models::{ActivityEntry, Plan, PlanFilter},
    params::{AddComment, CompletePlan, CreatePlan, Id, StopPlan},
};

impl Board {
    /// Creates a new plan, optionally activating it immediately.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();
        let now = Timestamp::now();

        let plan = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan(&params, now)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Created plan {} '{}'", plan.id, plan.name);
        Ok(plan)
    }

    /// Retrieves a plan by its ID, with tasks and actions loaded.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists plans matching the filter, newest first.
    pub async fn list_plans(&self, filter: PlanFilter) -> Result<Vec<Plan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans(&filter)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Executes a draft plan: draft → active.
    pub async fn execute_draft(&self, params: &Id) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;
        let now = Timestamp::now();

        let plan = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.execute_draft(plan_id, now)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Executed plan {}", plan.id);
        Ok(plan)
    }

    /// Permanently discards a draft plan. Returns the discarded plan.
    pub async fn discard_draft(&self, params: &Id) -> Result<Plan> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        let plan = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.discard_draft(plan_id)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!("Discarded draft plan {}", plan.id);
        Ok(plan)
    }

    /// Stops an active plan early, recording why.
    pub async fn stop_plan(&self, params: &StopPlan) -> Result<Plan> {
        let reason = params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();
        let now = Timestamp::now();

        let plan = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.stop_plan(&params, reason, now)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!(
            "Stopped plan {} ({}), closed as {}",
            plan.id,
            reason.as_str(),
            plan.status.as_str()
        );
        Ok(plan)
    }

    /// Completes an active plan with the given disposition.
    ///
    /// For `follow-on` and `handoff` the returned outcome carries the
    /// derivative draft created in the same transaction.
    pub async fn complete_plan(&self, params: &CompletePlan) -> Result<CompletionOutcome> {
        let disposition = params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();
        let now = Timestamp::now();

        let (plan, carryover) = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_plan(&params, disposition, now)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!(
            "Completed plan {} as {}",
            plan.id,
            plan.outcome.map(|o| o.as_str()).unwrap_or("unknown")
        );
        Ok(CompletionOutcome { plan, carryover })
    }

    /// Appends an operator comment to a plan's activity log.
    pub async fn add_comment(&self, params: &AddComment) -> Result<ActivityEntry> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();
        let now = Timestamp::now();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_comment(&params, now)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists a plan's activity log in chronological order.
    pub async fn list_activity(&self, params: &Id) -> Result<Vec<ActivityEntry>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_activity(plan_id)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
