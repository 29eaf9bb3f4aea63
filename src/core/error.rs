use std::path::PathBuf;

/// Errors produced while pruning empty directories.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("directory not empty: {}", .0.display())]
    DirectoryNotEmpty(PathBuf),

    #[error("failed to list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("number of passes must be greater than zero")]
    InvalidPassCount,
}
