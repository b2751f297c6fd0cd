//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::board::CompletionOutcome;
use crate::models::{Plan, Task};

/// Wrapper type for displaying the result of create operations.
///
/// Formats a success message with the resource id followed by the full
/// resource details in markdown.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Carries an optional list of human-readable changes shown above the
/// updated resource.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated task with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Discarded draft '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

/// Wrapper type for displaying the outcome of completing a plan.
///
/// Shows the closed plan and, when the disposition produced one, the
/// carryover draft so the operator immediately sees where unfinished work
/// went.
pub struct CompletionReport(pub CompletionOutcome);

impl fmt::Display for CompletionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.0.plan;
        write!(f, "Completed plan {} '{}'", plan.id, plan.name)?;
        match plan.outcome {
            Some(outcome) => writeln!(f, " with outcome: {outcome}")?,
            None => writeln!(f)?,
        }

        if let Some(draft) = &self.0.carryover {
            writeln!(f)?;
            writeln!(
                f,
                "Carryover draft created: {} '{}' ({} task(s))",
                draft.id,
                draft.name,
                draft.tasks.len()
            )?;
        }

        writeln!(f)?;
        write!(f, "{plan}")
    }
}
