//! Action model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ActionStatus;

/// A discrete, individually trackable system change scoped to a task, such
/// as reassigning a resource, flipping a status flag or setting a watch
/// threshold.
///
/// Invariant: `status == Applied` iff `actual` and `applied_at` are both set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionItem {
    /// Unique identifier for the action
    pub id: u64,

    /// ID of the owning task
    pub task_id: u64,

    /// Kind of the entity being changed (e.g. "station", "resource")
    pub entity_kind: String,

    /// Name of the entity being changed
    pub entity_name: String,

    /// Kind of change (e.g. "reassign", "set-threshold")
    pub action_kind: String,

    /// Value the change should move the entity to
    pub target: String,

    /// Whether the change has been applied
    pub status: ActionStatus,

    /// Value actually applied; set when the action toggles to applied
    pub actual: Option<String>,

    /// Timestamp when the action was applied (UTC)
    pub applied_at: Option<Timestamp>,

    /// Order of the action within the task (0-indexed)
    pub position: u32,
}
