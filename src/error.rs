//! Error types for iwyu-check operations.
//!
//! This module defines [`IwyuError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! Note that a file with missing includes is *not* an error: it is a
//! [`CheckOutcome::Failed`](crate::check::CheckOutcome::Failed) result. Errors
//! are reserved for problems that stop the tool from doing its job at all.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for iwyu-check operations.
#[derive(Debug, Error)]
pub enum IwyuError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// An external program could not be started at all.
    #[error("Failed to start {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A directory the run depends on could not be listed.
    #[error("Cannot read directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for iwyu-check operations.
pub type Result<T> = std::result::Result<T, IwyuError>;
