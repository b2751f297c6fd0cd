//! Core library for the Opsplan plan-execution engine.
//!
//! This crate implements the lifecycle of operational intervention plans:
//! ordered tasks, per-task action toggles, progress computation, stop and
//! completion resolution (including follow-on and handoff plan derivation),
//! an append-only activity log, and read-only scenario previews for drafts.
//!
//! # Architecture
//!
//! State transitions live in [`lifecycle`] as pure functions over in-memory
//! entities, so the state machine is testable without any storage attached.
//! The [`Board`](board::Board) facade owns the canonical plan collection
//! (a SQLite database), reads the clock once per command, applies the pure
//! transition and persists the result atomically. Each command either fully
//! applies or is rejected without touching the store.
//!
//! # Quick Start
//!
//! ```rust
//! use opsplan_core::{BoardBuilder, params::{CreatePlan, TaskSpec}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let board = BoardBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let params = CreatePlan {
//!     name: "Stabilize line 3".to_string(),
//!     tasks: vec![TaskSpec {
//!         title: "Reassign floater to packing".to_string(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! let plan = board.create_plan(&params).await?;
//! println!("Created plan: {}", plan);
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod db;
pub mod display;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod params;
pub mod scenario;

// Re-export commonly used types
pub use board::{Board, BoardBuilder, CompletionOutcome};
pub use db::Database;
pub use display::{ActivityFeed, CompletionReport, CreateResult, OperationStatus, PlanSummaries};
pub use error::{BoardError, Result};
pub use models::{
    ActionItem, ActionStatus, ActivityEntry, ActivityKind, Disposition, ImpactProjection,
    OriginKind, Plan, PlanFilter, PlanOrigin, PlanOutcome, PlanStatus, PlanSummary, Priority,
    StopReason, SuccessCriterion, Task, TaskStatus,
};
pub use params::{
    AddComment, CompletePlan, CreatePlan, Id, ListPlans, StopPlan, ToggleAction, UpdateTaskStatus,
};
pub use scenario::{PreviewContext, ScenarioPreview};
