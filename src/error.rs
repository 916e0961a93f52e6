//! Error types for the xts CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for xts operations.
///
/// Every variant maps to an exit code. Errors are never recovered from:
/// the first one raised travels straight to `main`, which reports it and exits.
#[derive(Error, Debug)]
pub enum XtsError {
    /// Invalid arguments or an unrecognized command name.
    #[error("{0}")]
    Usage(String),

    /// An explicit config path does not exist or lacks the `.xts` extension.
    #[error("xts config specified does not exist: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// No `.xts` file was found in the working directory.
    #[error("no config found")]
    ConfigNotFound,

    /// Several `.xts` files were found and none was named explicitly.
    #[error("multiple xts configs found: {}", .candidates.join(", "))]
    ConfigAmbiguous { candidates: Vec<String> },

    /// The config exists but could not be read.
    #[error("{0}")]
    ConfigAccess(String),

    /// The config content is not a valid command document.
    #[error("failed to parse xts config '{}': {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A command step could not be started.
    #[error("failed to execute '{command}': {message}")]
    Execution { command: String, message: String },
}

impl XtsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            XtsError::ConfigAmbiguous { .. } => exit_codes::AMBIGUOUS_CONFIG,
            XtsError::Usage(_)
            | XtsError::ConfigMissing(_)
            | XtsError::ConfigNotFound
            | XtsError::ConfigAccess(_)
            | XtsError::ConfigParse { .. }
            | XtsError::Execution { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for xts operations.
pub type Result<T> = std::result::Result<T, XtsError>;
