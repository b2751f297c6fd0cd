//! Activity log persistence: append-only writes and chronological reads.

use jiff::Timestamp;
use rusqlite::{params, Connection};

use crate::{
    error::{BoardError, DatabaseResultExt, Result},
    models::{ActivityEntry, ActivityKind},
    params::AddComment,
};

use super::{plan_queries, utils};

const INSERT_ACTIVITY_SQL: &str =
    "INSERT INTO activity (plan_id, kind, message, at) VALUES (?1, ?2, ?3, ?4)";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";

/// Appends one record to a plan's activity log. Records are never edited or
/// removed afterwards.
pub(super) fn append_activity(
    conn: &Connection,
    plan_id: u64,
    kind: ActivityKind,
    message: &str,
    now: Timestamp,
) -> Result<ActivityEntry> {
    conn.execute(
        INSERT_ACTIVITY_SQL,
        params![plan_id as i64, kind.as_str(), message, now.to_string()],
    )
    .map_err(|e| BoardError::database_error("Failed to append activity", e))?;

    Ok(ActivityEntry {
        id: conn.last_insert_rowid() as u64,
        plan_id,
        kind,
        message: message.to_string(),
        at: now,
    })
}

impl super::Database {
    /// Appends an operator comment to a plan's activity log.
    ///
    /// Comments are accepted in any plan status, terminal included; the log
    /// outlives the plan's lifecycle.
    pub fn add_comment(&mut self, params: &AddComment, now: Timestamp) -> Result<ActivityEntry> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![params.plan_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| BoardError::database_error("Failed to check plan existence", e))?;
        if !exists {
            return Err(BoardError::PlanNotFound { id: params.plan_id });
        }

        let entry = append_activity(&tx, params.plan_id, ActivityKind::Comment, &params.text, now)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(entry)
    }

    /// Lists a plan's activity log in chronological order.
    pub fn list_activity(&self, plan_id: u64) -> Result<Vec<ActivityEntry>> {
        if plan_queries::fetch_plan(&self.connection, plan_id)?.is_none() {
            return Err(BoardError::PlanNotFound { id: plan_id });
        }

        let query = format!(
            "SELECT {} FROM activity WHERE plan_id = ?1 ORDER BY id",
            utils::ACTIVITY_COLUMNS
        );
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare activity query")?;

        let entries = stmt
            .query_map(params![plan_id as i64], utils::activity_from_row)
            .map_err(|e| BoardError::database_error("Failed to query activity", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| BoardError::database_error("Failed to fetch activity", e));
        entries
    }
}
