//! Error types and handling for Daygen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Daygen operations
#[derive(Error, Diagnostic, Debug)]
pub enum DaygenError {
    #[error("Target directory not found: {path}")]
    #[diagnostic(
        code(daygen::fs::target_dir_not_found),
        help("Daygen never creates directories; create it first (e.g. `mkdir -p {path}`)")
    )]
    TargetDirNotFound { path: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(
        code(daygen::fs::write_failed),
        help("Check permissions and available disk space for the target directory")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(daygen::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(daygen::io::error))]
    IoError { message: String },
}

impl DaygenError {
    /// Creates a write-failure error from an underlying IO error
    pub fn write_failed(path: &std::path::Path, err: &std::io::Error) -> Self {
        DaygenError::FileWriteFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Creates a read-failure error from an underlying IO error
    pub fn read_failed(path: &std::path::Path, err: &std::io::Error) -> Self {
        DaygenError::FileReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias for Daygen operations
pub type Result<T> = std::result::Result<T, DaygenError>;
