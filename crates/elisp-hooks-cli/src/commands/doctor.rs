// Rust guideline compliant 2026-10-15

//! Implementation of the `pre-commit-elisp doctor` command.
//!
//! Reports which interpreter and helper library the hooks would use.

use anyhow::Result;
use elisp_hooks::SettingsArgs;
use elisp_hooks_core::{Config, LibraryLocator};
use serde::Serialize;
use std::path::PathBuf;

/// Resolved environment as seen by the hooks.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    /// Interpreter program as configured.
    pub emacs: String,
    /// Interpreter location on PATH, if found.
    pub emacs_path: Option<PathBuf>,
    /// First line of `emacs --version`, if it ran.
    pub emacs_version: Option<String>,
    /// Resolved helper library, if found.
    pub library: Option<PathBuf>,
    /// Why the helper library could not be resolved.
    pub library_error: Option<String>,
    /// Extra load-path directories.
    pub load_path: Vec<PathBuf>,
}

impl DoctorReport {
    /// Whether every dependency a hook needs was found.
    pub fn healthy(&self) -> bool {
        self.emacs_path.is_some() && self.library.is_some()
    }
}

/// Inspects the interpreter and helper library for `config`.
pub fn inspect(config: &Config, locator: &LibraryLocator) -> DoctorReport {
    let emacs_path = which::which(&config.emacs).ok();
    let emacs_version = emacs_path.as_ref().and_then(|path| {
        duct::cmd(path.as_path(), ["--version"])
            .stderr_null()
            .unchecked()
            .read()
            .ok()
            .and_then(|out| out.lines().next().map(str::to_string))
    });

    let (library, library_error) = match locator.resolve() {
        Ok(path) => (Some(path), None),
        Err(err) => (None, Some(err.to_string())),
    };

    DoctorReport {
        emacs: config.emacs.clone(),
        emacs_path,
        emacs_version,
        library,
        library_error,
        load_path: config.load_path.clone(),
    }
}

/// Executes the doctor command.
///
/// # Arguments
///
/// * `settings` - Configuration overrides from the command line
/// * `json` - Print the report as JSON
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be loaded
/// - The interpreter or helper library is missing
pub fn execute(settings: &SettingsArgs, json: bool) -> Result<()> {
    let dir = std::env::current_dir()?;
    let config = settings.load_config(&dir)?;
    elisp_hooks::logging::init(&config.log_level);

    let report = inspect(&config, &LibraryLocator::from_config(&config));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.healthy() {
        anyhow::bail!("Hooks cannot run until the problems above are fixed.");
    }
    Ok(())
}

fn print_report(report: &DoctorReport) {
    match &report.emacs_path {
        Some(path) => println!("Emacs:    {} ({})", report.emacs, path.display()),
        None => println!("Emacs:    {} (not found on PATH)", report.emacs),
    }
    if let Some(version) = &report.emacs_version {
        println!("Version:  {}", version);
    }
    match (&report.library, &report.library_error) {
        (Some(path), _) => println!("Library:  {}", path.display()),
        (None, Some(err)) => println!("Library:  {}", err),
        (None, None) => println!("Library:  unresolved"),
    }
    if report.load_path.is_empty() {
        println!("Load path: (none)");
    } else {
        println!("Load path:");
        for dir in &report.load_path {
            println!("  {}", dir.display());
        }
    }
}
