// Rust guideline compliant 2026-10-15

//! Shared `main` for the hook binaries.

use crate::{logging, run_hook, HookArgs, HookContext};
use clap::{CommandFactory, FromArgMatches};
use elisp_hooks_core::{
    DuctRunner, Error, Hook, LibraryLocator, ProcessRunner, Result, BUNDLED_LIBRARY,
};
use std::path::Path;

#[derive(Debug, clap::Parser)]
#[command(version)]
struct HookCli {
    #[command(flatten)]
    args: HookArgs,
}

/// Parses arguments for `hook`, exiting with a usage message on failure.
pub fn parse_args(hook: Hook) -> HookArgs {
    let matches = HookCli::command()
        .name(hook.name())
        .bin_name(hook.name())
        .about(hook.description())
        .get_matches();
    HookCli::from_arg_matches(&matches)
        .map(|cli| cli.args)
        .unwrap_or_else(|e| e.exit())
}

/// Entry point for a hook binary. Returns the process exit code.
pub fn main(hook: Hook) -> i32 {
    let args = parse_args(hook);
    execute(hook, &args, &DuctRunner)
}

/// Runs `hook` with parsed arguments and maps the outcome to an exit code.
///
/// The bundled helper library is the fallback when no library is configured.
/// Failures are reported on stderr as a single `Error:` line.
pub fn execute(hook: Hook, args: &HookArgs, runner: &dyn ProcessRunner) -> i32 {
    execute_with_default(hook, args, Path::new(BUNDLED_LIBRARY), runner)
}

/// Like [`execute`], with an explicit fallback library path.
pub fn execute_with_default(
    hook: Hook,
    args: &HookArgs,
    default_library: &Path,
    runner: &dyn ProcessRunner,
) -> i32 {
    match try_execute(hook, args, default_library, runner) {
        Ok(()) => 0,
        Err(err) => {
            report(hook, &err);
            err.exit_code()
        }
    }
}

fn try_execute(
    hook: Hook,
    args: &HookArgs,
    default_library: &Path,
    runner: &dyn ProcessRunner,
) -> Result<()> {
    let dir = std::env::current_dir()?;
    let config = args.settings.load_config(&dir)?;
    logging::init(&config.log_level);

    let locator = LibraryLocator::new(config.library.clone(), default_library);
    let context = HookContext::resolve(&config, &locator)?;
    run_hook(hook, &args.files, &context, runner)
}

fn report(hook: Hook, err: &Error) {
    tracing::debug!(%hook, configuration = err.is_configuration(), "Hook failed");
    eprintln!("Error: {err}");
}
