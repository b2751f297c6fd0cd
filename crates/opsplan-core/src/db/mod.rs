//! Database operations and SQLite management for the plan board.
//!
//! This module provides the storage layer for the plan-execution engine:
//! SQLite connection handling, schema management and the per-command
//! transaction boundaries. Lifecycle decisions are never made here; command
//! methods load entities, delegate to [`crate::lifecycle`] and persist the
//! result in a single transaction, so a rejected command leaves no partial
//! mutation behind.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod activity_queries;
pub mod migrations;
pub mod plan_queries;
pub mod task_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
