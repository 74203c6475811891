//! Typed error kinds for scaffolding operations
//!
//! The taxonomy distinguishes "one external clone failed" (recoverable, the
//! caller skips the repository and continues) from filesystem and data
//! failures (fatal to the run).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// An external clone invocation failed. Recoverable: the repository is
    /// skipped and processing continues with the remaining ones.
    #[error("failed to clone '{repo}': {reason}")]
    Clone { repo: String, reason: String },

    /// A path component exists as a plain file where a directory is needed.
    #[error("cannot create directory '{path}': a file with that name already exists")]
    NotADirectory { path: PathBuf },

    /// Filesystem failure during materialization or cleanup.
    #[error("filesystem error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Embedded configuration or tree data failed to parse.
    #[error("invalid manifest data: {0}")]
    Manifest(#[from] serde_yaml::Error),
}

impl Error {
    /// Filesystem error carrying the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors the caller may tolerate by skipping the current item.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Clone { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_errors_are_recoverable() {
        let err = Error::Clone {
            repo: "kernel".to_string(),
            reason: "exit code 128".to_string(),
        };
        assert!(err.is_recoverable());
    }

    #[test]
    fn filesystem_errors_are_fatal() {
        let err = Error::io("hawai/kernel", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!err.is_recoverable());

        let err = Error::NotADirectory {
            path: PathBuf::from("hawai/kernel"),
        };
        assert!(!err.is_recoverable());
    }
}
