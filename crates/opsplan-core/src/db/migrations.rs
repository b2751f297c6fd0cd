//! Database schema initialization and migrations.

use crate::error::{BoardError, DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // completion_notes landed after the initial schema; add it to
        // databases created before then.
        let has_completion_notes: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('plans') WHERE name = 'completion_notes'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_completion_notes {
            self.connection
                .execute("ALTER TABLE plans ADD COLUMN completion_notes TEXT", [])
                .map_err(|e| {
                    BoardError::database_error(
                        "Failed to add completion_notes column to plans table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
