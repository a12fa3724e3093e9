use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run before or during traversal.
///
/// Unreadable source files and unresolved imports are not represented here:
/// they are recovered locally and only show up in logs and run statistics.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Project root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Project root is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    #[error("Invalid alias rule '{0}': expected PREFIX=DIR with a non-empty prefix")]
    InvalidAlias(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
