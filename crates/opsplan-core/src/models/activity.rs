//! Activity log models.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Kind of an activity log record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    /// A lifecycle transition on the plan or one of its tasks
    StatusChange,
    /// A free-text operator comment
    Comment,
    /// A metric observation attached to the plan
    Metric,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::StatusChange => "status-change",
            ActivityKind::Comment => "comment",
            ActivityKind::Metric => "metric",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status-change" | "status_change" => Ok(ActivityKind::StatusChange),
            "comment" => Ok(ActivityKind::Comment),
            "metric" => Ok(ActivityKind::Metric),
            _ => Err(format!("Invalid activity kind: {s}")),
        }
    }
}

/// An immutable activity log record. Appended by commands, never edited or
/// removed; internal storage order is true chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    /// Unique identifier for the entry
    pub id: u64,

    /// ID of the plan the entry belongs to (reference, not ownership)
    pub plan_id: u64,

    /// Kind of the record
    pub kind: ActivityKind,

    /// Human-readable payload
    pub message: String,

    /// Timestamp the event occurred (UTC)
    pub at: Timestamp,
}
