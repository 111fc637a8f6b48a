//! Error taxonomy and build warnings

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal build failures. Errors on the root path abort the whole build;
/// failures below the root are downgraded to [`Warning`]s instead.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid exclude pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Recoverable problems encountered during traversal. The build continues
/// and the caller decides how to report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An entry below the root could not be read; it was skipped.
    Unreadable { path: PathBuf, message: String },
    /// `size` was requested together with first-level mode; directory sizes
    /// cannot be aggregated without traversing and were omitted.
    ShallowDirectorySize { path: PathBuf },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Unreadable { path, message } => {
                write!(f, "skipped unreadable entry {}: {message}", path.display())
            }
            Warning::ShallowDirectorySize { path } => write!(
                f,
                "size omitted for directories under {}: first-level mode does not traverse their contents",
                path.display()
            ),
        }
    }
}
