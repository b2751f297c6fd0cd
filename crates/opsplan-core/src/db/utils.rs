//! Row mapping helpers shared by the query modules.
//!
//! Column lists here define the canonical SELECT order for each table; the
//! matching `*_from_row` function maps a row in exactly that order. Nested
//! value objects (origin, success criteria, projected impact, system impact)
//! round-trip through their JSON text columns with serde.

use std::str::FromStr;

use jiff::Timestamp;
use rusqlite::{types::Type, Row};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    ActionItem, ActionStatus, ActivityEntry, ActivityKind, Plan, PlanOutcome, PlanStatus, Priority,
    StopReason, Task, TaskStatus,
};

pub(super) const PLAN_COLUMNS: &str = "id, name, status, outcome, priority, progress, \
     shift_context, created_by, target_completion, origin, projected_impact, success_criteria, \
     stop_reason, stop_notes, completion_notes, created_at, updated_at";

pub(super) const TASK_COLUMNS: &str = "id, plan_id, title, status, assignee, due_time, \
     started_at, completed_at, tradeoff, system_impact, position, created_at, updated_at";

pub(super) const ACTION_COLUMNS: &str = "id, task_id, entity_kind, entity_name, action_kind, \
     target, status, actual, applied_at, position";

pub(super) const ACTIVITY_COLUMNS: &str = "id, plan_id, kind, message, at";

/// Wraps a text-decoding failure so it surfaces as a rusqlite conversion
/// error carrying the offending column index.
fn conversion_error(
    index: usize,
    source: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(source))
}

fn invalid_text(index: usize, message: String) -> rusqlite::Error {
    conversion_error(
        index,
        std::io::Error::new(std::io::ErrorKind::InvalidData, message),
    )
}

/// Parses an enum stored as lowercase text.
fn parse_enum<T>(index: usize, value: String, what: &str) -> rusqlite::Result<T>
where
    T: FromStr,
{
    value
        .parse::<T>()
        .map_err(|_| invalid_text(index, format!("Invalid {what}: {value}")))
}

fn parse_opt_enum<T>(index: usize, value: Option<String>, what: &str) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
{
    value.map(|v| parse_enum(index, v, what)).transpose()
}

fn parse_timestamp(index: usize, value: String) -> rusqlite::Result<Timestamp> {
    value
        .parse::<Timestamp>()
        .map_err(|e| conversion_error(index, e))
}

fn parse_opt_timestamp(index: usize, value: Option<String>) -> rusqlite::Result<Option<Timestamp>> {
    value.map(|v| parse_timestamp(index, v)).transpose()
}

/// Decodes a JSON text column into its value object.
fn parse_json<T: DeserializeOwned>(index: usize, value: String) -> rusqlite::Result<T> {
    serde_json::from_str(&value).map_err(|e| conversion_error(index, e))
}

fn parse_opt_json<T: DeserializeOwned>(
    index: usize,
    value: Option<String>,
) -> rusqlite::Result<Option<T>> {
    value.map(|v| parse_json(index, v)).transpose()
}

/// Encodes a value object for storage in a JSON text column.
pub(super) fn to_json<T: Serialize>(value: &T) -> crate::error::Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub(super) fn to_opt_json<T: Serialize>(value: Option<&T>) -> crate::error::Result<Option<String>> {
    value.map(|v| to_json(v)).transpose()
}

/// Maps a plans row selected with [`PLAN_COLUMNS`]. Tasks are not loaded
/// here; callers attach them afterwards.
pub(super) fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
    Ok(Plan {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        status: parse_enum::<PlanStatus>(2, row.get(2)?, "plan status")?,
        outcome: parse_opt_enum::<PlanOutcome>(3, row.get(3)?, "plan outcome")?,
        priority: parse_enum::<Priority>(4, row.get(4)?, "priority")?,
        progress: row.get::<_, i64>(5)? as u8,
        shift_context: row.get(6)?,
        created_by: row.get(7)?,
        target_completion: parse_opt_timestamp(8, row.get(8)?)?,
        origin: parse_opt_json(9, row.get(9)?)?,
        projected_impact: parse_opt_json(10, row.get(10)?)?,
        success_criteria: parse_json(11, row.get(11)?)?,
        tasks: Vec::new(),
        stop_reason: parse_opt_enum::<StopReason>(12, row.get(12)?, "stop reason")?,
        stop_notes: row.get(13)?,
        completion_notes: row.get(14)?,
        created_at: parse_timestamp(15, row.get(15)?)?,
        updated_at: parse_timestamp(16, row.get(16)?)?,
    })
}

/// Maps a tasks row selected with [`TASK_COLUMNS`]. Actions are attached by
/// the caller.
pub(super) fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get::<_, i64>(0)? as u64,
        plan_id: row.get::<_, i64>(1)? as u64,
        title: row.get(2)?,
        status: parse_enum::<TaskStatus>(3, row.get(3)?, "task status")?,
        assignee: row.get(4)?,
        due_time: parse_opt_timestamp(5, row.get(5)?)?,
        started_at: parse_opt_timestamp(6, row.get(6)?)?,
        completed_at: parse_opt_timestamp(7, row.get(7)?)?,
        actions: Vec::new(),
        tradeoff: row.get(8)?,
        system_impact: parse_opt_json(9, row.get(9)?)?,
        position: row.get::<_, i64>(10)? as u32,
        created_at: parse_timestamp(11, row.get(11)?)?,
        updated_at: parse_timestamp(12, row.get(12)?)?,
    })
}

/// Maps an actions row selected with [`ACTION_COLUMNS`].
pub(super) fn action_from_row(row: &Row<'_>) -> rusqlite::Result<ActionItem> {
    Ok(ActionItem {
        id: row.get::<_, i64>(0)? as u64,
        task_id: row.get::<_, i64>(1)? as u64,
        entity_kind: row.get(2)?,
        entity_name: row.get(3)?,
        action_kind: row.get(4)?,
        target: row.get(5)?,
        status: parse_enum::<ActionStatus>(6, row.get(6)?, "action status")?,
        actual: row.get(7)?,
        applied_at: parse_opt_timestamp(8, row.get(8)?)?,
        position: row.get::<_, i64>(9)? as u32,
    })
}

/// Maps an activity row selected with [`ACTIVITY_COLUMNS`].
pub(super) fn activity_from_row(row: &Row<'_>) -> rusqlite::Result<ActivityEntry> {
    Ok(ActivityEntry {
        id: row.get::<_, i64>(0)? as u64,
        plan_id: row.get::<_, i64>(1)? as u64,
        kind: parse_enum::<ActivityKind>(2, row.get(2)?, "activity kind")?,
        message: row.get(3)?,
        at: parse_timestamp(4, row.get(4)?)?,
    })
}
