//! Error types for the mission and points-of-interest library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed caller input (out-of-range task index, blank field, ...)
    #[error("Invalid argument for field '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },
    /// Claim attempted before every task was done
    #[error("Mission {mission_id} cannot be claimed yet: {remaining} task(s) remaining")]
    NotCompletable { mission_id: u64, remaining: usize },
    /// Claim attempted on a mission whose reward was already collected
    #[error("Reward for mission {mission_id} was already claimed by {claimed_by}")]
    AlreadyClaimed { mission_id: u64, claimed_by: String },
    /// Mission not present in the catalog
    #[error("Mission with ID {id} not found")]
    MissionNotFound { id: u64 },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
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

/// Builder for creating invalid argument errors.
pub struct InvalidArgumentBuilder {
    field: String,
}

impl InvalidArgumentBuilder {
    /// Create a new invalid argument error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CoreError {
        CoreError::InvalidArgument {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CoreError {
    /// Creates a builder for input validation errors.
    pub fn invalid_argument(field: impl Into<String>) -> InvalidArgumentBuilder {
        InvalidArgumentBuilder::new(field)
    }

    /// Creates a database error with a context message.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Whether this is a user-facing condition the caller should report and
    /// recover from, rather than a programming or environment failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotCompletable { .. } | Self::AlreadyClaimed { .. }
        )
    }

    /// Whether the caller asked for something that does not exist or is
    /// malformed.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::MissionNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CoreError::database(message, e))
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
