//! Data models for plans, tasks, actions and the activity log.
//!
//! This module contains the core domain entities of the plan-execution
//! engine. Display implementations live in [`crate::display::models`] to keep
//! data structures separate from presentation logic.
//!
//! # Ownership
//!
//! Each [`Task`] is exclusively owned by one [`Plan`] and each [`ActionItem`]
//! by one task; [`ActivityEntry`] records reference a plan by id but do not
//! own it. Entities carry their invariants in doc comments; the functions in
//! [`crate::lifecycle`] are the only code that mutates statuses.

pub mod action;
pub mod activity;
pub mod criterion;
pub mod filters;
pub mod plan;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use action::ActionItem;
pub use activity::{ActivityEntry, ActivityKind};
pub use criterion::SuccessCriterion;
pub use filters::PlanFilter;
pub use plan::{ImpactProjection, OriginKind, Plan, PlanOrigin};
pub use status::{
    ActionStatus, Disposition, PlanOutcome, PlanStatus, Priority, StopReason, TaskStatus,
};
pub use summary::PlanSummary;
pub use task::{ImpactSnapshot, Task};
