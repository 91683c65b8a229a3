use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Marker, Version};

/// Unified error type for auto-version operations
#[derive(Error, Debug)]
pub enum AutoVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed version file {}: expected __version__ = \"MAJOR.MINOR.PATCH\", found {content:?}", .path.display())]
    MalformedVersion { path: PathBuf, content: String },

    #[error("Version overflow: cannot apply a {marker} bump to {version}")]
    VersionOverflow { version: Version, marker: Marker },

    #[error("Template error: {0}")]
    Template(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in auto-version
pub type Result<T> = std::result::Result<T, AutoVersionError>;

/// Longest excerpt of a malformed file kept in the error message.
const EXCERPT_LEN: usize = 60;

impl AutoVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoVersionError::Config(msg.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        AutoVersionError::Template(msg.into())
    }

    /// Create a malformed-version error, keeping only the first line of the
    /// offending content (truncated).
    pub fn malformed(path: impl Into<PathBuf>, content: &str) -> Self {
        let first_line = content.lines().next().unwrap_or("");
        let excerpt: String = first_line.chars().take(EXCERPT_LEN).collect();
        AutoVersionError::MalformedVersion {
            path: path.into(),
            content: excerpt,
        }
    }

    /// True for the malformed version file case
    pub fn is_malformed(&self) -> bool {
        matches!(self, AutoVersionError::MalformedVersion { .. })
    }
}
