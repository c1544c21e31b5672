//! Error types for the report module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that abort a whole report batch.
///
/// Problems with a single report file never surface here; they are
/// carried as [`crate::SkipReason`] so the batch can continue.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Reports directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Reports path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Error reading Lighthouse reports directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
