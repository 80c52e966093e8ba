use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load the sunshine dataset. Always fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// `row` is the 1-based data row (header excluded).
    #[error("row {row}: invalid month '{value}'")]
    InvalidMonth { row: usize, value: String },

    #[error("row {row}: invalid {column} value '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl LoadError {
    /// Wrap a failed read of `path`.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A month key outside `Jan..Dec`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown month key '{0}' (expected Jan..Dec)")]
pub struct UnknownMonth(pub String);
