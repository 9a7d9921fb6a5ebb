//! Error types for copy operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when copying a skill tree.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The source path is missing or is not a directory.
    #[error("source '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Source and destination overlap, so copying would destroy or recurse
    /// into the source.
    #[error("source '{}' and destination '{}' overlap", src.display(), dst.display())]
    Overlap {
        /// Source directory.
        src: PathBuf,
        /// Destination directory.
        dst: PathBuf,
    },
    /// Walking the source tree failed.
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
    /// An I/O error occurred on a specific path.
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        /// Path the failing operation touched.
        path:   PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

impl CopyError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
