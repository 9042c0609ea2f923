// Rust guideline compliant 2026-10-15

//! Resolved per-invocation settings.

use elisp_hooks_core::{Config, LibraryLocator, Result};
use std::path::PathBuf;

/// Everything a hook invocation needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    /// Interpreter program.
    pub emacs: String,
    /// Existing helper library path.
    pub library: PathBuf,
    /// Extra interpreter load-path directories.
    pub load_path: Vec<PathBuf>,
}

impl HookContext {
    /// Resolves a context from configuration using the given locator.
    ///
    /// # Errors
    ///
    /// Returns `Error::LibraryNotFound` if the helper library cannot be located.
    pub fn resolve(config: &Config, locator: &LibraryLocator) -> Result<Self> {
        let library = locator.resolve()?;
        Ok(Self {
            emacs: config.emacs.clone(),
            library,
            load_path: config.load_path.clone(),
        })
    }

    /// Resolves a context from configuration using the bundled library as fallback.
    ///
    /// # Errors
    ///
    /// Returns `Error::LibraryNotFound` if the helper library cannot be located.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::resolve(config, &LibraryLocator::from_config(config))
    }
}
