//! Task and action commands for the Board.

use jiff::Timestamp;
use log::info;
use tokio::task;

use super::Board;
use crate::{
    db::Database,
    error::{BoardError, Result},
    models::{ActionItem, Task},
    params::{ToggleAction, UpdateTaskStatus},
};

impl Board {
    /// Transitions a task to a new status and recomputes plan progress.
    pub async fn update_task_status(&self, params: &UpdateTaskStatus) -> Result<Task> {
        let new_status = params.validate()?;

        let db_path = self.db_path.clone();
        let params = params.clone();
        let now = Timestamp::now();

        let task = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_task_status(&params, new_status, now)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!(
            "Task {} moved to {}",
            task.id,
            task.status.as_str()
        );
        Ok(task)
    }

    /// Flips one action between pending and applied.
    pub async fn toggle_action(&self, params: &ToggleAction) -> Result<ActionItem> {
        let db_path = self.db_path.clone();
        let params = params.clone();
        let now = Timestamp::now();

        let action = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.toggle_action(&params, now)
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        info!(
            "Action {} is now {}",
            action.id,
            action.status.as_str()
        );
        Ok(action)
    }
}
