//! Error types for iniman

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for iniman operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for iniman
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy '{from}' to '{to}': {source}")]
    FileCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to change permissions of '{path}': {source}")]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Access denied: '{path}' is read-only")]
    AccessDenied { path: PathBuf },

    // -------------------------------------------------------------------------
    // Parse Errors
    // -------------------------------------------------------------------------
    #[error("Malformed line {line_number}: '{line}'")]
    MalformedLine { line_number: usize, line: String },

    #[error("Settings file '{path}' is empty or unreadable")]
    EmptyOrUnreadable {
        path: PathBuf,
        #[source]
        source: Option<Box<Error>>,
    },

    // -------------------------------------------------------------------------
    // Binding Errors
    // -------------------------------------------------------------------------
    #[error("Type '{type_name}' has no section binding")]
    UnboundType { type_name: &'static str },

    #[error("Cannot convert [{section}] {key}: {source}")]
    Coercion {
        section: String,
        key: String,
        #[source]
        source: CoercionError,
    },

    // -------------------------------------------------------------------------
    // Backup Errors
    // -------------------------------------------------------------------------
    #[error("Backup not found: '{path}'")]
    BackupNotFound { path: PathBuf },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Async Errors
    // -------------------------------------------------------------------------
    #[cfg(feature = "async")]
    #[error("Background task failed: {0}")]
    Task(String),
}

/// Failure to convert a stored textual value into a bound member type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    #[error("'{value}' is not a valid integer: {reason}")]
    InvalidInteger { value: String, reason: String },

    #[error("'{value}' is not a valid float: {reason}")]
    InvalidFloat { value: String, reason: String },

    #[error("'{value}' is not a valid boolean (expected true or false)")]
    InvalidBoolean { value: String },

    #[error("unknown variant '{variant}', expected one of: {expected}")]
    UnknownVariant { variant: String, expected: String },
}

impl Error {
    /// Check if this is a "not found" type error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::BackupNotFound { .. } => true,
            Error::FileRead { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this is a backup-related error
    #[must_use]
    pub fn is_backup_error(&self) -> bool {
        matches!(self, Error::BackupNotFound { .. } | Error::FileCopy { .. })
    }

    /// Check if the underlying storage failed (disk, filesystem permissions, directories)
    #[must_use]
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            Error::FileRead { .. }
                | Error::FileWrite { .. }
                | Error::FileCopy { .. }
                | Error::DirectoryCreate { .. }
                | Error::Permissions { .. }
        )
    }
}

// =============================================================================
// Filesystem Helper Functions
// =============================================================================
// These reduce repetitive map_err patterns in the manager module.

use std::path::Path;

/// Create a directory (and parents) with proper error handling
pub fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copy a file byte-for-byte with proper error handling
pub fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    std::fs::copy(from, to).map_err(|e| Error::FileCopy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })
}
