//! Error types for the treasure hunt store
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using HuntError
pub type Result<T> = std::result::Result<T, HuntError>;

/// Unified error type for hunt store operations
#[derive(Debug, Error)]
pub enum HuntError {
    // -------------------------------------------------------------------------
    // Usage Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Usage(String),

    #[error("Invalid hunt id '{0}': must be a plain directory name")]
    InvalidHuntId(String),

    // -------------------------------------------------------------------------
    // Setup Errors (fatal)
    // -------------------------------------------------------------------------
    #[error("Failed to create hunt directory {path}: {source}")]
    HuntDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create log file {path}: {source}")]
    LogCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Not-Found Errors
    // -------------------------------------------------------------------------
    #[error("Hunt does not exist: {0}")]
    HuntNotFound(String),

    #[error("Treasure with ID {id} not found in hunt {hunt}")]
    TreasureNotFound { hunt: String, id: i32 },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open treasure file {path}: {source}")]
    RecordsOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to get file information for {path}: {source}")]
    RecordsMetadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read treasure file {path}: {source}")]
    RecordsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write treasure: {0}")]
    RecordWrite(#[source] std::io::Error),

    #[error("Failed to create temporary file: {0}")]
    TempCreate(#[source] std::io::Error),

    #[error("Failed to write to temporary file: {0}")]
    TempWrite(#[source] std::io::Error),

    #[error("Failed to replace treasure file {path}: {source}")]
    RecordsReplace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove hunt directory {path}: {source}")]
    HuntDirRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl HuntError {
    /// Create a new usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Setup failures leave the environment unusable and abort the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::HuntDirCreate { .. } | Self::LogCreate { .. })
    }

    /// Check if this error is a command-line usage problem.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::InvalidHuntId(_))
    }

    /// Check if this error reports a missing hunt or treasure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HuntNotFound(_) | Self::TreasureNotFound { .. })
    }

    /// Process exit status for an operation that ended with this error.
    ///
    /// Recognized operations succeed even when they report a logical
    /// failure; only usage and setup problems are non-zero.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() || self.is_fatal() {
            1
        } else {
            0
        }
    }
}
