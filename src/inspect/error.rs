//! Error types for bundle inspection.
//!
//! Every failure inside the engine is typed here, but none of them escapes a
//! single bundle: tool failures collapse to empty output and descriptor
//! failures collapse to an empty field set. The types exist so the collapse
//! points can log what went wrong.
//!
//! # Example
//!
//! ```no_run
//! # use std::path::{Path, PathBuf};
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
//! #
//! # trait ErrorExt<T> {
//! #     fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
//! # }
//! # impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
//! #     fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
//! #         self.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
//! #     }
//! # }
//! fn read_descriptor(path: &Path) -> Result<Vec<u8>> {
//!     std::fs::read(path).fs_context("reading descriptor", path)
//! }
//! ```

use std::{io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Errors produced while inspecting a bundle.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "reading descriptor")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// The external tool could not be located on `PATH`.
    #[error("tool {tool} not found: {source}")]
    ToolNotFound {
        /// Tool name as requested
        tool: String,
        /// Lookup failure
        #[source]
        source: which::Error,
    },

    /// Child process could not be spawned or awaited.
    #[error("failed to run command {command}: {error}")]
    CommandFailed {
        /// Command that failed to execute
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// Child process ran but reported failure.
    #[error("command {command} exited with status {status:?}")]
    NonZeroExit {
        /// Command that failed
        command: String,
        /// Exit code, `None` when terminated by a signal
        status: Option<i32>,
        /// Combined stdout and stderr of the failed run
        output: String,
    },

    /// Property list (Info.plist) decoding error.
    #[error("{0}")]
    Plist(#[from] plist::Error),
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "reading descriptor", "listing bundle directory".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_context_keeps_path() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result
            .fs_context("reading descriptor", "/tmp/Foo.app/Contents/Info.plist")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "reading descriptor /tmp/Foo.app/Contents/Info.plist: gone"
        );
    }

    #[test]
    fn test_non_zero_exit_message() {
        let err = Error::NonZeroExit {
            command: "lipo".to_string(),
            status: Some(1),
            output: String::new(),
        };
        assert_eq!(err.to_string(), "command lipo exited with status Some(1)");
    }
}
