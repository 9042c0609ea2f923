// Rust guideline compliant 2026-10-15

//! Helper library resolution.
//!
//! The interpreter loads `pre-commit-elisp.el` at the start of every
//! invocation. Its location is resolved once at startup: an explicitly
//! configured path wins when it exists, otherwise the copy bundled with this
//! crate is used.

use crate::{Config, Error, Result};
use std::path::{Path, PathBuf};

/// File name of the helper library.
pub const LIBRARY_FILE: &str = "pre-commit-elisp.el";

/// Path of the helper library shipped alongside this crate's sources.
pub const BUNDLED_LIBRARY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/lisp/pre-commit-elisp.el");

/// Locates the helper library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryLocator {
    configured: Option<PathBuf>,
    default_path: PathBuf,
}

impl LibraryLocator {
    /// Creates a locator from an optional explicit path and a fallback.
    pub fn new(configured: Option<PathBuf>, default_path: impl Into<PathBuf>) -> Self {
        Self {
            configured,
            default_path: default_path.into(),
        }
    }

    /// Creates a locator using the configured library and the bundled fallback.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.library.clone(), BUNDLED_LIBRARY)
    }

    /// Fallback path used when no configured path exists.
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Resolves the library path.
    ///
    /// # Errors
    ///
    /// Returns `Error::LibraryNotFound` if neither the configured path nor the
    /// default path is an existing file.
    pub fn resolve(&self) -> Result<PathBuf> {
        let mut searched = Vec::with_capacity(2);

        if let Some(path) = &self.configured {
            if path.is_file() {
                tracing::debug!(library = %path.display(), "Using configured helper library");
                return Ok(path.clone());
            }
            tracing::warn!(
                library = %path.display(),
                "Configured helper library does not exist, falling back to default"
            );
            searched.push(path.clone());
        }

        if self.default_path.is_file() {
            tracing::debug!(library = %self.default_path.display(), "Using default helper library");
            return Ok(self.default_path.clone());
        }
        searched.push(self.default_path.clone());

        Err(Error::LibraryNotFound { searched })
    }
}
