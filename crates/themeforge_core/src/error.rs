//! Error taxonomy for theme operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThemeError>;

/// Failures surfaced by theme operations.
///
/// Precondition failures carry the theme id or path the user supplied so the
/// CLI can report them verbatim; I/O and JSON failures carry the offending
/// file path.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// `init` target (or a directory-copy destination) already exists.
    #[error("theme directory already exists: {0}")]
    TargetExists(PathBuf),

    /// `merge` requires a `parts` directory under the theme.
    #[error("theme \"{0}\" not found or parts directory missing")]
    PartsMissing(String),

    /// `bump`/`package` require the extension manifest on disk.
    #[error("theme \"{0}\" not found")]
    ManifestMissing(String),

    /// Manifest has no string `version` field.
    #[error("no \"version\" string in {0}")]
    VersionFieldMissing(PathBuf),

    /// Version string is not three dot-separated integers.
    #[error("invalid version \"{0}\": expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ThemeError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ThemeError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        ThemeError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}
