//! Error types for the plan board library.

use thiserror::Error;

/// Comprehensive error type for all board operations.
///
/// The first four variants are the logical rejection kinds of the command
/// surface; the remainder cover storage and configuration failures. Commands
/// validate before mutating, so a returned error implies the store was left
/// untouched.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Task not found for the given ID
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },
    /// Action not found for the given ID
    #[error("Action with ID {id} not found")]
    ActionNotFound { id: u64 },
    /// Command attempted against a plan/task/action whose status forbids it
    #[error("Invalid transition: {detail}")]
    InvalidTransition { detail: String },
    /// A required field was absent or empty
    #[error("Missing required field '{field}': {reason}")]
    MissingField { field: String, reason: String },
    /// `complete` disposition requested while unfinished work remains
    #[error(
        "Plan has incomplete work: {pending_actions} pending action(s), \
         {open_tasks} open task(s), {unmet_criteria} unmet criteria"
    )]
    IncompleteWork {
        pending_actions: usize,
        open_tasks: usize,
        unmet_criteria: usize,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl BoardError {
    /// Creates a database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates a missing-field rejection.
    pub fn missing_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid-transition rejection.
    pub fn invalid_transition(detail: impl Into<String>) -> Self {
        Self::InvalidTransition {
            detail: detail.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BoardError::database_error(message, e))
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;
