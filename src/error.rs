use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Input file not found or not readable: {0:?}")]
    InvalidInputPath(PathBuf),

    #[error("Output directory does not exist: {0:?}")]
    InvalidOutputDirectory(PathBuf),

    #[error("Chapter mode requires a non-empty pattern")]
    EmptyPattern,

    #[error("Invalid chapter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SplitError {
    /// Wrap a `std::io::Error` with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
