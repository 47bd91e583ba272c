//! Error and skip types for roster extraction.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning, reading, or writing roster files.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The configured source directory does not exist.
    #[error("Directory {} does not exist", .0.display())]
    MissingSourceDir(PathBuf),

    /// The configured source path exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// I/O failure on a specific path.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a single `.dat` file contributed nothing to the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The first line is empty after trimming.
    #[error("empty first line")]
    EmptyLine,
    /// The first line splits into fewer fields than a record needs.
    #[error("only {found} fields")]
    TooFewFields { found: usize },
    /// The name field is empty after trimming.
    #[error("empty name field")]
    MissingName,
    /// The username field is empty after trimming.
    #[error("empty username field")]
    MissingUsername,
    /// The file could not be opened, read, or decoded.
    #[error("{0}")]
    Unreadable(String),
}

impl SkipReason {
    /// True for skips caused by I/O or decoding failures rather than record content.
    pub fn is_failure(&self) -> bool {
        matches!(self, SkipReason::Unreadable(_))
    }
}
