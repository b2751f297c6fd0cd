//! Display formatting functions and result types.
//!
//! Domain models carry their own `Display` implementations producing
//! markdown; this module adds newtype wrappers for collections and operation
//! results so every interface (terminal today, others later) renders plans
//! identically.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │  (Plan, Task)   │───▶│ (collections,   │───▶│    Output       │
//! │                 │    │  results)       │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers (PlanSummaries, ActivityFeed)
//! - [`results`]: operation result wrappers (CreateResult, UpdateResult,
//!   DeleteResult, CompletionReport)
//! - [`status`]: status and confirmation messages (OperationStatus)
//! - [`datetime`]: date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{ActivityFeed, PlanSummaries};
pub use datetime::LocalDateTime;
pub use results::{CompletionReport, CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
