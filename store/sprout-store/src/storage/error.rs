//! Storage errors.

use std::fmt;

/// Which collection a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `projects`
    Project,
    /// `folders`
    Folder,
}

impl RecordKind {
    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Folder => "folder",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by a [`StorageBackend`](super::StorageBackend).
///
/// Lookups report absence as `Ok(None)`. `NotFound` is reserved for
/// operations that need an existing record to act on.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Target record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Collection searched
        kind: RecordKind,
        /// Requested id
        id: String,
    },

    /// Backend could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Driver error, passed through as-is. Downcast to reach the
    /// concrete driver type.
    #[error(transparent)]
    Database(Box<dyn std::error::Error + Send + Sync + 'static>),
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(Box::new(err))
    }
}

impl StorageError {
    /// Shorthand for a missing folder.
    pub fn folder_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: RecordKind::Folder,
            id: id.into(),
        }
    }

    /// Shorthand for a connection failure.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Whether this is a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
