//! Error types for kodegen_app_detect.
//!
//! Per-bundle problems never surface here; the inspection engine degrades them
//! to defaults (see [`crate::inspect::Error`]). This module covers the few
//! conditions that end a run, some with recovery suggestions for the user.

use thiserror::Error;

/// Result type alias for kodegen_app_detect operations
pub type Result<T> = std::result::Result<T, DetectError>;

/// Main error type for a detection run
#[derive(Error, Debug)]
pub enum DetectError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Inputs expanded to no bundles
    #[error("No app bundles found.")]
    NoBundlesFound {
        /// Inputs as given on the command line
        inputs: Vec<String>,
    },
}

impl DetectError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            DetectError::Cli(CliError::MissingArgument { .. }) => vec![
                "Pass one or more .app bundles: kodegen_app_detect /Applications/Safari.app"
                    .to_string(),
                "Or a directory to scan: kodegen_app_detect /Applications".to_string(),
            ],
            DetectError::Cli(CliError::NoBundlesFound { inputs }) => vec![
                format!("Check that these paths exist: {}", inputs.join(", ")),
                "Quote glob patterns so the shell does not expand them first".to_string(),
                "Directories are scanned one level deep for *.app".to_string(),
            ],
            _ => vec![],
        }
    }
}
