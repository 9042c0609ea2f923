// Rust guideline compliant 2026-10-15

//! Hook command wrappers for invoking the Elisp hooks from the CLI.

use elisp_hooks::{entry, Hook, HookArgs};
use elisp_hooks_core::DuctRunner;

/// Supported hook actions.
#[derive(Debug, Clone, clap::Subcommand)]
pub enum HookAction {
    /// Byte-compile Emacs Lisp files, leaving .elc files
    ByteCompile(HookArgs),
    /// Check that Emacs Lisp files byte-compile, leaving no .elc files
    CheckByteCompile(HookArgs),
    /// Check parentheses in Emacs Lisp files
    CheckParens(HookArgs),
    /// Indent Emacs Lisp files in place
    Indent(HookArgs),
}

impl HookAction {
    /// Splits the action into its hook kind and arguments.
    pub fn into_parts(self) -> (Hook, HookArgs) {
        match self {
            HookAction::ByteCompile(args) => (Hook::ByteCompile, args),
            HookAction::CheckByteCompile(args) => (Hook::CheckByteCompile, args),
            HookAction::CheckParens(args) => (Hook::CheckParens, args),
            HookAction::Indent(args) => (Hook::Indent, args),
        }
    }
}

/// Runs the requested hook action.
///
/// # Returns
///
/// The exit code the process should terminate with.
pub fn execute(action: HookAction) -> i32 {
    let (hook, args) = action.into_parts();
    entry::execute(hook, &args, &DuctRunner)
}
