//! High-level board API for managing plans, tasks and actions.
//!
//! This module provides the main [`Board`] interface to the plan-execution
//! engine. The board is the coordination point between interface layers and
//! the database: it validates parameters, reads the ambient clock exactly
//! once per command and hands the typed inputs plus that timestamp to the
//! storage layer, which applies the pure [`crate::lifecycle`] transitions
//! inside a single transaction.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (handlers.rs)  │───▶│ (plan_ops,      │───▶│   (via db/)     │
//! │                 │    │  task_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers      Validation + clock     Transactions
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: factory for creating [`Board`] instances with configuration
//! - [`plan_ops`]: plan-level commands and queries
//! - [`task_ops`]: task and action commands
//! - [`handlers`]: operations returning formatted wrapper types
//!
//! # Usage
//!
//! ```rust,no_run
//! use opsplan_core::{params::CreatePlan, BoardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let board = BoardBuilder::new()
//!     .with_database_path(Some("/custom/path/opsplan.db"))
//!     .build()
//!     .await?;
//!
//! let plan = board
//!     .create_plan(&CreatePlan {
//!         name: "Rebalance line 2".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::models::Plan;

pub mod builder;
pub mod handlers;
pub mod plan_ops;
pub mod task_ops;


pub use builder::BoardBuilder;

/// Main board interface for managing plans and their tasks.
pub struct Board {
    pub(crate) db_path: PathBuf,
}

impl Board {
    /// Creates a new board with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

/// Result of completing a plan: the closed source plan and, for the
/// follow-on and handoff dispositions, the derivative draft created with it.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    /// The source plan, now `completed`
    pub plan: Plan,
    /// The carryover draft, if the disposition produced one
    pub carryover: Option<Plan>,
}
