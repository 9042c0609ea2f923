// Rust guideline compliant 2026-10-15

//! Batch interpreter command construction.
//!
//! Arguments are kept as a vector and handed to the OS as-is. Nothing here
//! goes through a shell, so file names are never reinterpreted.

use crate::{Hook, LIBRARY_ENV};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A fully built interpreter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElispCommand {
    program: OsString,
    args: Vec<OsString>,
    env: Vec<(OsString, OsString)>,
}

impl ElispCommand {
    /// Starts a non-interactive invocation of `program`.
    pub fn batch(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: vec![OsString::from("--batch")],
            env: Vec::new(),
        }
    }

    /// Builds the canonical invocation for a hook.
    ///
    /// Produces `program --batch [-L dir]... --eval <snippet> <file>...` with
    /// `PRE_COMMIT_ELISP_LIB` set to `library` for the child only.
    pub fn for_hook<P: AsRef<Path>>(
        hook: Hook,
        program: &str,
        library: &Path,
        load_path: &[PathBuf],
        files: &[P],
    ) -> Self {
        Self::batch(program)
            .env(LIBRARY_ENV, library)
            .load_path(load_path)
            .eval(hook.snippet())
            .files(files)
    }

    /// Adds each directory to the interpreter's load path.
    pub fn load_path<P: AsRef<Path>>(mut self, dirs: &[P]) -> Self {
        for dir in dirs {
            self.args.push(OsString::from("-L"));
            self.args.push(dir.as_ref().as_os_str().to_owned());
        }
        self
    }

    /// Evaluates `form` before processing the remaining arguments.
    pub fn eval(mut self, form: impl Into<OsString>) -> Self {
        self.args.push(OsString::from("--eval"));
        self.args.push(form.into());
        self
    }

    /// Appends file arguments in order.
    pub fn files<P: AsRef<Path>>(mut self, files: &[P]) -> Self {
        self.args
            .extend(files.iter().map(|f| f.as_ref().as_os_str().to_owned()));
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: impl Into<OsString>, value: impl AsRef<OsStr>) -> Self {
        self.env.push((key.into(), value.as_ref().to_owned()));
        self
    }

    /// Program to execute.
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Environment overrides for the child.
    pub fn env_vars(&self) -> &[(OsString, OsString)] {
        &self.env
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}
