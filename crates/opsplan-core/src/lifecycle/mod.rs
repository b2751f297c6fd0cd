//! Pure lifecycle state machine for plans, tasks and actions.
//!
//! Every transition in this module is a plain function over in-memory
//! entities taking the command timestamp as an argument, so the state
//! machine is testable with fixed clocks and no storage attached. Callers
//! (the [`crate::board::Board`] facade) read the ambient clock once per
//! command, apply a transition here, recompute progress and persist the
//! result atomically.
//!
//! Submodules:
//!
//! - [`task_fsm`]: legal status transitions for a single task and its actions
//! - [`progress`]: completion percentage derivation
//! - [`plan_fsm`]: draft execution and early stop
//! - [`resolver`]: completion outcome and carryover draft derivation

pub mod plan_fsm;
pub mod progress;
pub mod resolver;
pub mod task_fsm;

#[cfg(test)]
mod tests;

/// Fixed horizon added to the activation time to produce a plan's
/// display-only target completion.
pub const EXECUTION_HORIZON_HOURS: i64 = 4;

pub use plan_fsm::{execute_draft, stop_plan};
pub use progress::progress;
pub use resolver::{assess, resolve_completion, CompletionAssessment};
