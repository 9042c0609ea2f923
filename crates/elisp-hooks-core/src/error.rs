// Rust guideline compliant 2026-10-15

//! Error types for the Elisp hook core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code reported when the interpreter is not on the execution path.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code reported for configuration errors and launch failures.
pub const EXIT_FAILURE: i32 = 1;

/// Error types for hook operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Helper library could not be located.
    #[error(
        "PRE_COMMIT_ELISP_LIB is not set or points to a non-existent file (searched: {})",
        display_paths(.searched)
    )]
    LibraryNotFound {
        /// Every candidate path that was checked, in resolution order.
        searched: Vec<PathBuf>,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Interpreter binary is absent from the execution path.
    #[error("Interpreter '{program}' not found on PATH")]
    InterpreterNotFound {
        /// Program name as configured.
        program: String,
    },

    /// Interpreter was found but could not be started.
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        /// Program name as configured.
        program: String,
        /// Underlying launch failure.
        #[source]
        source: std::io::Error,
    },

    /// Interpreter exited with a nonzero status.
    #[error("Command '{program}' returned non-zero exit status {code}")]
    ProcessFailed {
        /// Program name as configured.
        program: String,
        /// Exit code of the child.
        code: i32,
    },

    /// Interpreter was killed by a signal.
    #[error("Command '{program}' died with signal {signal}")]
    Terminated {
        /// Program name as configured.
        program: String,
        /// Terminating signal number.
        signal: i32,
    },
}

impl Error {
    /// Returns the process exit code a hook should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InterpreterNotFound { .. } => EXIT_NOT_FOUND,
            Error::ProcessFailed { code, .. } => *code,
            Error::Terminated { signal, .. } => 128 + signal,
            Error::Io(_)
            | Error::LibraryNotFound { .. }
            | Error::InvalidConfig(_)
            | Error::Launch { .. } => EXIT_FAILURE,
        }
    }

    /// Returns whether this error was raised before any process was spawned
    /// because of missing or invalid configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::LibraryNotFound { .. } | Error::InvalidConfig(_)
        )
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
