//! Error types for the reality lab library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all store and facade operations.
///
/// The detector, reconciler and comparator never return errors; everything
/// here originates in persistence, lineage walks, or input validation.
#[derive(Error, Debug)]
pub enum LabError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A write would push the backing store past its quota
    #[error("Storage full: write needs {required} bytes but capacity is {capacity} bytes")]
    StorageFull { required: usize, capacity: usize },
    /// The parent links of a reality loop back on themselves
    #[error("Corrupt lineage: parent chain of reality '{id}' contains a cycle")]
    CorruptLineage { id: String },
    /// Reality not found for the given ID
    #[error("Reality with ID {id} not found")]
    RealityNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
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

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> LabError {
        LabError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LabError {
        LabError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LabError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether this error means the underlying persistence write failed.
    ///
    /// Callers of `save` use this to tell a full or broken backing store
    /// apart from bad input.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::StorageFull { .. } | Self::Database { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LabError::database(message).with_source(e))
    }
}

/// Result type alias for lab operations
pub type Result<T> = std::result::Result<T, LabError>;
