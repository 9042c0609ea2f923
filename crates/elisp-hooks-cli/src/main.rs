// Rust guideline compliant 2026-10-15

//! pre-commit-elisp CLI Application
//!
//! Runs the Emacs Lisp pre-commit hooks and checks their environment.

use clap::Parser;
use elisp_hooks::SettingsArgs;
use elisp_hooks_cli::commands;

#[derive(Parser, Debug)]
#[command(
    name = "pre-commit-elisp",
    version,
    about = "Pre-commit hooks for Emacs Lisp",
    long_about = "Runs Emacs in batch mode to byte-compile, check, and indent Emacs Lisp files. Each subcommand exits 0 when every file passes.",
    after_help = "Examples:\n  pre-commit-elisp check-parens init.el\n  pre-commit-elisp check-byte-compile -L lisp lisp/*.el\n  pre-commit-elisp indent --emacs emacs-30 init.el\n  pre-commit-elisp doctor --json\n"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    #[command(flatten)]
    Hook(commands::hooks::HookAction),

    /// Report the interpreter and helper library the hooks would use
    Doctor {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Hook(action) => commands::hooks::execute(action),
        Commands::Doctor { json, settings } => {
            match commands::doctor::execute(&settings, json) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    1
                }
            }
        }
    };

    std::process::exit(code);
}
