//! Builder for creating and configuring Lab instances.

use std::path::{Path, PathBuf};

use tokio::{sync::broadcast, task};

use super::Lab;
use crate::{
    db::Database,
    error::{LabError, Result},
    store::DEFAULT_CAPACITY,
};

const EVENT_BUFFER: usize = 64;

/// Builder for creating and configuring Lab instances.
#[derive(Debug, Clone)]
pub struct LabBuilder {
    database_path: Option<PathBuf>,
    capacity: Option<usize>,
}

impl LabBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            capacity: Some(DEFAULT_CAPACITY),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/realitylab/realitylab.db` or
    /// `~/.local/share/realitylab/realitylab.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the storage quota in bytes. `None` disables the quota check.
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds the configured lab instance.
    ///
    /// # Errors
    ///
    /// Returns `LabError::XdgDirectory` if no default path can be placed
    /// Returns `LabError::FileSystem` if the database directory cannot be created
    /// Returns `LabError::Database` if database initialization fails
    pub async fn build(self) -> Result<Lab> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| LabError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), LabError>(())
        })
        .await
        .map_err(|e| LabError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Ok(Lab::new(db_path, self.capacity, events))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("realitylab")
            .place_data_file("realitylab.db")
            .map_err(|e| LabError::XdgDirectory(e.to_string()))
    }
}

impl Default for LabBuilder {
    fn default() -> Self {
        Self::new()
    }
}
