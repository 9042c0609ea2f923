// Rust guideline compliant 2026-10-15

//! Synchronous execution of interpreter commands.

use crate::{ElispCommand, Error, Result};
use std::path::PathBuf;
use std::process::ExitStatus;

/// Executes a built command and reports how it ended.
pub trait ProcessRunner {
    /// Runs `command` to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the program is missing, cannot be launched, or
    /// exits unsuccessfully.
    fn run(&self, command: &ElispCommand) -> Result<()>;
}

/// Runs commands as child processes through `duct`.
///
/// The child inherits stdin, stdout, stderr and the current environment,
/// plus the command's own environment overrides. Output is never captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuctRunner;

impl DuctRunner {
    /// Looks up the program on PATH, or checks it directly if it is a path.
    ///
    /// # Errors
    ///
    /// Returns `Error::InterpreterNotFound` if the program cannot be found.
    pub fn locate(&self, command: &ElispCommand) -> Result<PathBuf> {
        which::which(command.program()).map_err(|e| {
            tracing::debug!(error = %e, "Interpreter lookup failed");
            Error::InterpreterNotFound {
                program: command.program().to_string_lossy().into_owned(),
            }
        })
    }
}

impl ProcessRunner for DuctRunner {
    #[tracing::instrument(skip_all, fields(program = %command.program().to_string_lossy()))]
    fn run(&self, command: &ElispCommand) -> Result<()> {
        let program = command.program().to_string_lossy().into_owned();
        let executable = self.locate(command)?;

        tracing::debug!(executable = %executable.display(), argv = ?command.argv(), "Running interpreter");

        let mut expression = duct::cmd(executable.as_path(), command.args()).unchecked();
        for (key, value) in command.env_vars() {
            expression = expression.env(key, value);
        }

        let output = expression.run().map_err(|source| Error::Launch {
            program: program.clone(),
            source,
        })?;

        check_status(program, output.status)
    }
}

fn check_status(program: String, status: ExitStatus) -> Result<()> {
    if status.success() {
        tracing::debug!("Interpreter exited successfully");
        return Ok(());
    }

    if let Some(code) = status.code() {
        tracing::warn!(code, "Interpreter exited with failure");
        return Err(Error::ProcessFailed { program, code });
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            tracing::warn!(signal, "Interpreter terminated by signal");
            return Err(Error::Terminated { program, signal });
        }
    }

    Err(Error::ProcessFailed {
        program,
        code: crate::error::EXIT_FAILURE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_not_found() {
        let cmd = ElispCommand::batch("definitely-not-an-emacs-binary-7f3a");
        let err = DuctRunner.run(&cmd).unwrap_err();
        assert!(matches!(err, Error::InterpreterNotFound { .. }));
        assert_eq!(err.exit_code(), 127);
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_maps_to_terminated() {
        use std::os::unix::process::ExitStatusExt;
        let err = check_status("emacs".to_string(), ExitStatus::from_raw(9)).unwrap_err();
        assert!(matches!(err, Error::Terminated { signal: 9, .. }));
        assert_eq!(err.exit_code(), 137);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_passes_through() {
        use std::os::unix::process::ExitStatusExt;
        let err = check_status("emacs".to_string(), ExitStatus::from_raw(3 << 8)).unwrap_err();
        assert!(matches!(err, Error::ProcessFailed { code: 3, .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
