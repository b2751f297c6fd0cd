//! Board construction and database file resolution.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Board;
use crate::{
    db::Database,
    error::{BoardError, Result},
};

/// Builds a [`Board`] bound to a plan collection on disk.
///
/// The board itself only remembers the path; the builder's job is to decide
/// that path and prove the collection can be opened before handing the
/// board out.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    database_path: Option<PathBuf>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Points the board at an explicit database file instead of the XDG
    /// default (`$XDG_DATA_HOME/opsplan/opsplan.db`). A `None` keeps the
    /// default, which lets callers pass an optional CLI flag straight
    /// through.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the database path, creates missing parent directories and
    /// opens the collection once so schema problems surface here rather
    /// than on the first command.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::FileSystem` if the database path is invalid
    /// Returns `BoardError::Database` if database initialization fails
    pub async fn build(self) -> Result<Board> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BoardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), BoardError>(())
        })
        .await
        .map_err(|e| BoardError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Board::new(db_path))
    }

    /// Default plan collection location under the XDG data directory.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("opsplan")
            .place_data_file("opsplan.db")
            .map_err(|e| BoardError::XdgDirectory(e.to_string()))
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
