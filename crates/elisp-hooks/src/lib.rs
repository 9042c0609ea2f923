// Rust guideline compliant 2026-10-15

//! Elisp Pre-commit Hooks
//!
//! This crate provides the pre-commit hook implementations for Emacs Lisp:
//! - Byte-compilation, in place or into temporary files
//! - Parenthesis checking
//! - Indentation
//!
//! Every hook builds one batch interpreter command and runs it to completion.

pub mod args;
pub mod context;
pub mod entry;
pub mod logging;

pub use args::{HookArgs, SettingsArgs};
pub use context::HookContext;
pub use elisp_hooks_core::Hook;

use elisp_hooks_core::{ElispCommand, ProcessRunner, Result};
use std::path::Path;

/// Runs a hook over `files`.
///
/// Builds the interpreter command from the resolved `context` and hands it to
/// `runner`. An empty file list succeeds without spawning anything.
///
/// # Errors
///
/// Returns an error if the interpreter is missing, cannot be launched, or
/// reports a failure for any file.
pub fn run_hook<P: AsRef<Path>>(
    hook: Hook,
    files: &[P],
    context: &HookContext,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    if files.is_empty() {
        tracing::debug!(%hook, "No files to check");
        return Ok(());
    }

    let command = ElispCommand::for_hook(
        hook,
        &context.emacs,
        &context.library,
        &context.load_path,
        files,
    );

    tracing::info!(%hook, files = files.len(), "Running hook");
    runner.run(&command)
}
